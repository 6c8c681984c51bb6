/// Emboss performance benchmark
/// Measures full-image render time across image sizes
use emboss_effect::{Effect, EmbossFilter};
use image::{Rgba, RgbaImage};
use std::time::Instant;

fn benchmark_size(width: u32, height: u32, filter: &EmbossFilter) -> f64 {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) * 255 / (width + height)) as u8,
            255,
        ])
    });

    let mut times = Vec::with_capacity(5);

    // Run 5 times
    for _ in 0..5 {
        let mut test_img = img.clone();
        let start = Instant::now();
        filter.apply(&mut test_img).unwrap();
        times.push(start.elapsed().as_secs_f64());
    }

    // Sort times and take middle 3 (remove fastest and slowest)
    times.sort_by(|a, b| a.partial_cmp(b).unwrap());
    times[1..4].iter().sum::<f64>() / 3.0 * 1000.0
}

fn main() {
    let filter = EmbossFilter::from_angle(45.0).unwrap();

    println!("🚀 Starting Emboss Performance Benchmark");
    println!("🔄 Iterations per size: 5 (taking middle 3)");
    println!();

    for (width, height) in [(320, 240), (800, 600), (1920, 1080)] {
        let avg_ms = benchmark_size(width, height, &filter);
        println!(
            "  {:>9} ({:>7} pixels): {:>8.3} ms",
            format!("{width}x{height}"),
            width * height,
            avg_ms
        );
    }
}
