pub mod buffer;
pub mod emboss;
pub mod kernel;
pub mod region;

pub use buffer::PixelBuffer;
pub use emboss::{EmbossConfig, EmbossFilter};
pub use kernel::WeightMatrix;
pub use region::Region;

use image::RgbaImage;

pub type EmbossResult<T> = Result<T, EmbossError>;

#[derive(thiserror::Error, Debug)]
pub enum EmbossError {
    #[error("Angle out of range: {0}, valid range is 0 - 360")]
    AngleOutOfRange(f64),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> EmbossResult<()>;
}
