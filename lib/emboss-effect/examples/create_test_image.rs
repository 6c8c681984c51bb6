use image::RgbaImage;
use image::Rgba;

fn main() {
    // Create a 800x600 test image with colorful gradients
    let mut img = RgbaImage::new(800, 600);

    for y in 0..600 {
        for x in 0..800 {
            let r = (x * 255 / 800) as u8;
            let g = (y * 255 / 600) as u8;
            let b = ((x + y) * 255 / 1400) as u8;
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    // Two bright discs so the relief has edges to pick up
    for (cx, cy, radius) in [(250i32, 200i32, 90i32), (550, 400, 60)] {
        for y in (cy - radius).max(0)..(cy + radius).min(600) {
            for x in (cx - radius).max(0)..(cx + radius).min(800) {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= radius * radius {
                    img.put_pixel(x as u32, y as u32, Rgba([240, 240, 240, 255]));
                }
            }
        }
    }

    std::fs::create_dir_all("data").unwrap();
    img.save("data/test.png").unwrap();
    println!("Created data/test.png");
}
