use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Buffer access reduced to what the emboss convolution needs: a scalar
/// brightness per pixel going in, an opaque gray level coming out
pub trait PixelBuffer {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Brightness of the pixel at (x, y)
    fn intensity_at(&self, x: u32, y: u32) -> u8;

    /// Overwrite the pixel at (x, y) with an opaque gray level
    fn put_gray(&mut self, x: u32, y: u32, level: u8);
}

// 0.299 R + 0.587 G + 0.114 B in 16-bit fixed point
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32) >> 16) as u8
}

impl PixelBuffer for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn intensity_at(&self, x: u32, y: u32) -> u8 {
        let pixel = self.get_pixel(x, y);
        luma(pixel[0], pixel[1], pixel[2])
    }

    fn put_gray(&mut self, x: u32, y: u32, level: u8) {
        self.put_pixel(x, y, Rgba([level, level, level, 255]));
    }
}

impl PixelBuffer for GrayImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn intensity_at(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y)[0]
    }

    fn put_gray(&mut self, x: u32, y: u32, level: u8) {
        self.put_pixel(x, y, Luma([level]));
    }
}
