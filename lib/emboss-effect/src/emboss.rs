use crate::{Effect, EmbossError, EmbossResult, PixelBuffer, Region, WeightMatrix};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Emboss effect configuration
///
/// `angle` is the light direction in degrees, valid from 0 to 360.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct EmbossConfig {
    #[derivative(Default(value = "0.0"))]
    angle: f64,
}

impl EmbossConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for EmbossConfig {
    fn apply(&self, image: &mut RgbaImage) -> EmbossResult<()> {
        EmbossFilter::new(self.clone())?.apply(image)
    }
}

/// A validated emboss filter with its weight matrix cached
///
/// Construction is the only fallible step, rendering itself cannot fail.
#[derive(Debug, Clone)]
pub struct EmbossFilter {
    angle: f64,
    weights: WeightMatrix,
}

impl EmbossFilter {
    pub fn new(config: EmbossConfig) -> EmbossResult<Self> {
        if !(0.0..=360.0).contains(&config.angle) {
            return Err(EmbossError::AngleOutOfRange(config.angle));
        }

        Ok(Self {
            angle: config.angle,
            weights: WeightMatrix::from_angle(config.angle),
        })
    }

    /// Shorthand for `new` with only the angle set
    pub fn from_angle(angle: f64) -> EmbossResult<Self> {
        Self::new(EmbossConfig::new().with_angle(angle))
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Emboss every pixel of `region`, reading from `src` and writing the
    /// gray relief into `dst`
    ///
    /// Kernel clipping is keyed to the buffer bounds, not to `region`: only
    /// pixels on the outermost rows and columns of the buffer drop kernel
    /// cells, pixels on the edge of an interior region still read their full
    /// 3x3 neighborhood from `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` and `dst` dimensions differ or if `region` does not
    /// fit inside them. Both are caller bugs, not runtime conditions.
    pub fn render_region<S, D>(&self, src: &S, dst: &mut D, region: Region)
    where
        S: PixelBuffer,
        D: PixelBuffer,
    {
        let (width, height) = (src.width(), src.height());
        assert!(
            width == dst.width() && height == dst.height(),
            "source and destination dimensions differ"
        );
        assert!(
            region.fits_within(width, height),
            "region exceeds buffer bounds"
        );

        for y in region.top..=region.bottom {
            // Clip kernel rows that would sample outside the buffer
            let fy_start = if y == 0 { 1 } else { 0 };
            let fy_end = if y == height - 1 { 2 } else { 3 };

            for x in region.left..=region.right {
                let fx_start = if x == 0 { 1 } else { 0 };
                let fx_end = if x == width - 1 { 2 } else { 3 };

                let mut sum = 0.0f64;
                for fy in fy_start..fy_end {
                    for fx in fx_start..fx_end {
                        let weight = self.weights.at(fy, fx);
                        let intensity = src.intensity_at(x + fx - 1, y + fy - 1);
                        sum += weight * intensity as f64;
                    }
                }

                // Truncate before the mid-gray bias so flat areas land
                // exactly on 128
                let level = (sum as i32 + 128).clamp(0, 255) as u8;
                dst.put_gray(x, y, level);
            }
        }
    }
}

impl Effect for EmbossFilter {
    fn apply(&self, image: &mut RgbaImage) -> EmbossResult<()> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Ok(());
        }

        log::debug!("emboss {}x{} at {} degrees", width, height, self.angle);

        let src = image.clone();
        self.render_region(&src, image, Region::full(width, height));

        Ok(())
    }
}
