use std::io::{self, BufWriter, Write};

use log::info;

use simdray::error::{validation_error, Result};
use simdray::image::{render_parallel, ImageConfig};
use simdray::simd::backend_name;

// Usage: simdray [WIDTH HEIGHT] > image.ppm
fn parse_config(args: &[String]) -> Result<ImageConfig> {
    match args {
        [] => Ok(ImageConfig::default()),
        [width, height] => {
            let parse = |name: &str, value: &str| {
                value
                    .parse::<usize>()
                    .map_err(|e| validation_error(format!("invalid {name} '{value}': {e}")))
            };
            ImageConfig::new(
                parse("width", width.as_str())?,
                parse("height", height.as_str())?,
            )
        }
        _ => Err(validation_error("expected no arguments or WIDTH HEIGHT")),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_config(&args)?;

    info!(
        "rendering {}x{} gradient with the {} backend",
        config.width(),
        config.height(),
        backend_name()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_parallel(&mut out, &config)?;
    out.flush()?;

    Ok(())
}
