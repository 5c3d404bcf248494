//! Color types and the perceptual distance primitive.

mod distance;
mod rgb;

pub use distance::{hex_distance, redmean};
pub use rgb::Rgb;
