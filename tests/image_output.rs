//! End-to-end checks on the gradient image emitter.

use simdray::image::{
    gradient_pixel, render_batched, render_parallel, render_scalar, write_header, ImageConfig,
};

fn render(
    render_fn: fn(&mut Vec<u8>, &ImageConfig) -> simdray::Result<()>,
    config: &ImageConfig,
) -> String {
    let mut out = Vec::new();
    render_fn(&mut out, config).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_default_image_layout() {
    let config = ImageConfig::default();
    let text = render(render_parallel, &config);
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("256 256"));
    assert_eq!(lines.next(), Some("255"));

    let pixels: Vec<&str> = lines.collect();
    assert_eq!(pixels.len(), 256 * 256);

    // row 0 starts black and ramps green; row 255 ends near yellow
    assert_eq!(pixels[0], "0 0 0");
    assert_eq!(pixels[1], "0 0 0");
    assert_eq!(pixels[128], "0 127 0");
    assert_eq!(pixels[255], "0 254 0");
    assert_eq!(pixels[256 * 255 + 255], "254 254 0");

    for line in &pixels {
        let values: Vec<u16> = line.split(' ').map(|v| v.parse().unwrap()).collect();
        assert_eq!(values.len(), 3, "line {line:?}");
        assert!(values.iter().all(|&v| v <= 255));
        assert_eq!(values[2], 0);
    }
}

#[test]
fn test_all_render_paths_identical() {
    for (width, height) in [(256, 256), (8, 1), (1, 8), (9, 7), (100, 3)] {
        let config = ImageConfig::new(width, height).unwrap();

        let scalar = render(render_scalar, &config);
        let batched = render(render_batched, &config);
        let parallel = render(render_parallel, &config);

        assert!(scalar == batched, "scalar and batched differ for {width}x{height}");
        assert!(batched == parallel, "batched and parallel differ for {width}x{height}");
    }
}

#[test]
fn test_rows_are_top_to_bottom() {
    let config = ImageConfig::new(8, 4).unwrap();
    let text = render(render_batched, &config);
    let pixels: Vec<&str> = text.lines().skip(3).collect();

    for row in 0..4 {
        for col in 0..8 {
            let [r, g, b] = gradient_pixel(&config, row, col).to_rgb24();
            assert_eq!(pixels[row * 8 + col], format!("{r} {g} {b}"), "({row}, {col})");
        }
    }
}

#[test]
fn test_header_only_depends_on_dimensions() {
    let mut out = Vec::new();
    write_header(&mut out, &ImageConfig::new(7, 3).unwrap()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "P3\n7 3\n255\n");
}
