/// Emboss effect example
/// Demonstrates the directional emboss relief effect
use emboss_effect::{Effect, EmbossConfig, EmbossFilter};
use image::ImageReader;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image
    let img_path = Path::new("data/test.png");
    let mut img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    let filter = EmbossFilter::new(EmbossConfig::new().with_angle(135.0))?;
    filter.apply(&mut img)?;

    img.save(output_dir.join("emboss_effect.png"))?;

    println!("✓ Emboss effect applied successfully!");
    println!("  Angle: 135 degrees");
    println!("  Effect: tmp/emboss_effect.png");

    Ok(())
}
