//! Scalar versus batch colour packing.
//!
//! The single-pixel and eight-pixel paths must produce the same bytes for
//! the same input, clamp identically at the edges of the channel range and
//! keep pixel `i` at output triple `i`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdray::colour::{write_colour, write_colour_batch, CHANNEL_MAX, CHANNEL_SCALE};
use simdray::{Colour, ColourX8, Rounding};

/// A colour replicated into all eight lanes packs like the scalar path.
#[test]
fn test_replicated_colour_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..5_000 {
        let colour = Colour::new(rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>());
        let expected = colour.to_rgb24();
        let packed = ColourX8::splat(colour).to_rgb24();

        for (lane, pixel) in packed.chunks_exact(3).enumerate() {
            assert_eq!(pixel, &expected, "lane {lane} of {colour:?}");
        }
    }
}

/// Eight distinct colours pack like eight scalar conversions, in order.
#[test]
fn test_distinct_pixels_match_scalar_in_lane_order() {
    let mut rng = StdRng::seed_from_u64(54321);

    for _ in 0..1_000 {
        let pixels: [Colour; 8] = std::array::from_fn(|_| {
            Colour::new(
                rng.random_range(-0.5..=1.5),
                rng.random_range(-0.5..=1.5),
                rng.random_range(-0.5..=1.5),
            )
        });
        let packed = ColourX8::from_pixels(&pixels).to_rgb24();

        for (lane, pixel) in pixels.iter().enumerate() {
            assert_eq!(
                &packed[3 * lane..3 * lane + 3],
                &pixel.to_rgb24(),
                "lane {lane} of {pixel:?}"
            );
        }
    }
}

/// Out-of-range and boundary channel values.
#[test]
fn test_clamping_edge_cases() {
    let cases = [
        (1.5f32, 255u8),
        (-0.5, 0),
        (1.0, 255),
        (CHANNEL_MAX, 255),
        (0.0, 0),
        (-0.0, 0),
        (f32::INFINITY, 255),
        (f32::NEG_INFINITY, 0),
        (f32::NAN, 0),
        (1.0e30, 255),
    ];

    for (value, expected) in cases {
        let scalar = Colour::new(value, value, value).to_rgb24();
        assert_eq!(scalar, [expected; 3], "scalar {value}");

        let batch = ColourX8::splat(Colour::new(value, value, value)).to_rgb24();
        assert_eq!(batch, [expected; 24], "batch {value}");
    }

    assert_eq!((CHANNEL_MAX * CHANNEL_SCALE) as u8, 255);
}

/// No channel value can produce anything but 0..=255 in nearest mode either.
#[test]
fn test_nearest_rounding_saturates() {
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..1_000 {
        let r: [f32; 8] = std::array::from_fn(|_| rng.random_range(-2.0..=2.0));
        let batch = ColourX8::opaque(r, [1.0; 8], [0.0; 8]);

        let truncated = batch.to_rgb24();
        let nearest = batch.to_rgb24_with(Rounding::Nearest);

        for lane in 0..8 {
            let t = truncated[3 * lane];
            let n = nearest[3 * lane];
            assert!(n == t || n == t + 1, "lane {lane}: truncate {t}, nearest {n}");
            assert_eq!(nearest[3 * lane + 1], 255);
            assert_eq!(nearest[3 * lane + 2], 0);
        }
    }
}

/// Eight pixels of a red ramp serialise to the expected eight lines.
#[test]
fn test_red_ramp_end_to_end() {
    let r: [f32; 8] = std::array::from_fn(|i| i as f32 / 8.0);
    let batch = ColourX8::opaque(r, [0.0; 8], [0.0; 8]);

    let mut out = Vec::new();
    write_colour_batch(&mut out, &batch).unwrap();

    let expected = "0 0 0\n31 0 0\n63 0 0\n95 0 0\n127 0 0\n159 0 0\n191 0 0\n223 0 0\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);

    let mut scalar = Vec::new();
    for value in r {
        write_colour(&mut scalar, &Colour::new(value, 0.0, 0.0)).unwrap();
    }
    assert_eq!(String::from_utf8(scalar).unwrap(), expected);
}

/// A sink that refuses writes surfaces as an error instead of a panic.
#[test]
fn test_failing_sink_reports_error() {
    struct Closed;

    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let error = write_colour_batch(&mut Closed, &ColourX8::splat(Colour::default())).unwrap_err();
    assert!(error.to_string().contains("closed"));
}
