/// Sub-region emboss example
/// Embosses a window in the middle and leaves the rest of the image untouched
use anyhow::Result;
use emboss_effect::{EmbossFilter, Region};
use image::ImageReader;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img_path = Path::new("data/test.png");
    let src = ImageReader::open(img_path)?.decode()?.to_rgba8();
    let mut dst = src.clone();

    let (width, height) = src.dimensions();
    let region = Region::new(width / 4, height / 4, width * 3 / 4, height * 3 / 4);

    let filter = EmbossFilter::from_angle(45.0)?;
    filter.render_region(&src, &mut dst, region);

    dst.save(output_dir.join("emboss_region.png"))?;

    println!("✓ Embossed region applied successfully!");
    println!(
        "  Region: {},{} - {},{}",
        region.left, region.top, region.right, region.bottom
    );
    println!("  Effect: tmp/emboss_region.png");

    Ok(())
}
