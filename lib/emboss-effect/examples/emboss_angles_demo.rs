/// Emboss angle sweep example
/// Renders the test image at 45-degree light steps
use anyhow::Result;
use emboss_effect::{Effect, EmbossFilter};
use image::ImageReader;
use std::path::Path;

fn main() -> Result<()> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img_path = Path::new("data/test.png");
    let img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    for angle in (0..360).step_by(45) {
        let filter = EmbossFilter::from_angle(angle as f64)?;

        let mut out = img.clone();
        filter.apply(&mut out)?;

        let name = format!("emboss_{angle:03}.png");
        out.save(output_dir.join(&name))?;
        println!("✓ tmp/{name}");
    }

    Ok(())
}
