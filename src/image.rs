//! Gradient image driver emitting plain-text PPM (`P3`).
//!
//! Pixel `(row, col)` gets red `row / height`, green `col / width`, blue 0.
//! Rows are written top to bottom, columns left to right, one `r g b` line
//! per pixel after the `P3` header.

use std::io::Write;

use log::{debug, info};
use rayon::prelude::*;

use crate::colour::{write_colour, write_rgb24, Colour, ColourX8};
use crate::error::{validation_error, Result};
use crate::simd::LANE_COUNT;

/// Longest pixel line, `"255 255 255\n"`.
const MAX_LINE_BYTES: usize = 12;

/// Image dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageConfig {
    width: usize,
    height: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

impl ImageConfig {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            return Err(validation_error("image width must be greater than zero"));
        }
        if height == 0 {
            return Err(validation_error("image height must be greater than zero"));
        }
        if width.checked_mul(height).is_none() || width.checked_mul(MAX_LINE_BYTES).is_none() {
            return Err(validation_error(format!(
                "image dimensions {width}x{height} are too large"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Writes `P3`, the dimensions and the maximum channel value.
pub fn write_header<W: Write + ?Sized>(out: &mut W, config: &ImageConfig) -> Result<()> {
    write!(out, "P3\n{} {}\n255\n", config.width, config.height)?;
    Ok(())
}

/// Colour of a single pixel.
pub fn gradient_pixel(config: &ImageConfig, row: usize, col: usize) -> Colour {
    Colour::new(
        row as f32 / config.height as f32,
        col as f32 / config.width as f32,
        0.0,
    )
}

/// Colours of pixels `col..col + 8` of `row`.
pub fn gradient_batch(config: &ImageConfig, row: usize, col: usize) -> ColourX8 {
    let r = [row as f32 / config.height as f32; LANE_COUNT];
    let g: [f32; LANE_COUNT] =
        std::array::from_fn(|k| (col + k) as f32 / config.width as f32);

    ColourX8::opaque(r, g, [0.0; LANE_COUNT])
}

/// Writes one row, eight pixels per batch. A tail narrower than a batch
/// goes through the scalar path.
fn render_row<W: Write + ?Sized>(out: &mut W, config: &ImageConfig, row: usize) -> Result<()> {
    let full = config.width - config.width % LANE_COUNT;

    for col in (0..full).step_by(LANE_COUNT) {
        write_rgb24(out, &gradient_batch(config, row, col).to_rgb24())?;
    }
    for col in full..config.width {
        write_colour(out, &gradient_pixel(config, row, col))?;
    }
    Ok(())
}

/// Renders one pixel at a time.
pub fn render_scalar<W: Write + ?Sized>(out: &mut W, config: &ImageConfig) -> Result<()> {
    write_header(out, config)?;

    for row in 0..config.height {
        debug!("Scanlines remaining: {}", config.height - row);
        for col in 0..config.width {
            write_colour(out, &gradient_pixel(config, row, col))?;
        }
    }

    info!("Done: {}x{} (scalar)", config.width, config.height);
    Ok(())
}

/// Renders eight pixels at a time. Output is byte-identical to
/// [`render_scalar`].
pub fn render_batched<W: Write + ?Sized>(out: &mut W, config: &ImageConfig) -> Result<()> {
    write_header(out, config)?;

    for row in 0..config.height {
        debug!("Scanlines remaining: {}", config.height - row);
        render_row(out, config, row)?;
    }

    info!("Done: {}x{} (batched)", config.width, config.height);
    Ok(())
}

/// Renders rows on the rayon pool into memory, then writes them in order.
/// Output is byte-identical to [`render_batched`].
pub fn render_parallel<W: Write + ?Sized>(out: &mut W, config: &ImageConfig) -> Result<()> {
    let row_capacity = config.width * MAX_LINE_BYTES;

    debug!(
        "Rendering {} scanlines on {} threads",
        config.height,
        rayon::current_num_threads()
    );
    let rows: Vec<Vec<u8>> = (0..config.height)
        .into_par_iter()
        .map(|row| {
            let mut buffer = Vec::with_capacity(row_capacity);
            render_row(&mut buffer, config, row).map(|_| buffer)
        })
        .collect::<Result<_>>()?;

    write_header(out, config)?;
    for bytes in &rows {
        out.write_all(bytes)?;
    }

    info!("Done: {}x{} (parallel)", config.width, config.height);
    Ok(())
}
