use super::SIMD_ALIGNMENT;

/// Stack buffer forced onto a 32-byte boundary so that aligned register
/// loads and stores can be used on it.
#[repr(C, align(32))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aligned<T>(pub T);

// `repr(align)` needs a literal; keep it in sync with the register width.
const _: () = assert!(std::mem::align_of::<Aligned<[f32; 8]>>() == SIMD_ALIGNMENT);

impl<T> Aligned<T> {
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Aligned(value)
    }

    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, const N: usize> Aligned<[T; N]> {
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_buffer_is_on_register_boundary() {
        let buffer = Aligned::new([0.0f32; 8]);
        assert_eq!(buffer.as_ptr() as usize % SIMD_ALIGNMENT, 0);

        let bytes = Aligned::new([0u8; 32]);
        assert_eq!(bytes.as_ptr() as usize % SIMD_ALIGNMENT, 0);
    }

    #[test]
    fn test_into_inner_returns_contents() {
        let buffer = Aligned::new([1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(buffer.into_inner(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }
}
