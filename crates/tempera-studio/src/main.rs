use std::path::PathBuf;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use tempera_engine::logging::{init_logging, LoggingConfig};
use tempera_sketch::prelude::*;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 200;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tempera.png"));

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║           TEMPERA STUDIO v0.1          ║");
    println!("  ║   headless sketch  ·  png export       ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut sketch = Sketch::new(SketchConfig::new(WIDTH, HEIGHT).offscreen());
    render(&mut sketch).context("rendering sketch")?;
    report(&sketch).context("sampling colors")?;

    sketch
        .renderer()
        .to_image()
        .context("pixel buffer does not match the surface size")?
        .save(&out)
        .with_context(|| format!("writing {}", out.display()))?;

    log::info!("wrote {}x{} sketch to {}", WIDTH, HEIGHT, out.display());
    Ok(())
}

/// Horizontal ramp from transparent to opaque teal, used as a backdrop.
fn backdrop() -> ImageHandle {
    let ramp = RgbaImage::from_fn(64, 1, |x, _| {
        let a = (x * 255 / 63) as u8;
        Rgba([0, 128, 128, a])
    });
    ImageHandle::new(ramp)
}

fn render(sketch: &mut Sketch) -> Result<()> {
    // ── backdrop ──────────────────────────────────────────────────────────
    sketch.background("#1e1e2e")?;
    sketch.background(backdrop())?;

    // ── hsb wash ──────────────────────────────────────────────────────────
    sketch.color_mode(ColorSpace::Hsb, (360.0, 100.0, 100.0, 1.0));
    sketch.background((30.0, 80.0, 100.0, 0.25))?;

    // ── paint state ───────────────────────────────────────────────────────
    sketch.fill((200.0, 60.0, 90.0))?.stroke("white")?.no_stroke();
    sketch.color_mode_str("rgb", &[255.0]);
    log::debug!(
        "fill enabled: {}, stroke enabled: {}",
        sketch.is_fill_enabled(),
        sketch.is_stroke_enabled()
    );
    Ok(())
}

fn report(sketch: &Sketch) -> Result<()> {
    let from = sketch.color("crimson")?;
    let to = sketch.color([40.0, 90.0, 220.0])?;

    for step in 0..=4 {
        let c = sketch.lerp_color(from, to, step as f32 / 4.0);
        println!(
            "  {:<24} r {:>5.1}  g {:>5.1}  b {:>5.1}  hue {:>5.1}",
            c.to_css_string(),
            sketch.red(c),
            sketch.green(c),
            sketch.blue(c),
            sketch.hue(c),
        );
    }

    let fill = sketch.renderer().fill_color();
    println!();
    println!("  fill {}  (brightness {:.1})", fill, sketch.brightness(fill));
    println!();
    Ok(())
}
