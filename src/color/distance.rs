//! Perceptually weighted color distance ("redmean").
//!
//! Plain Euclidean RGB distance misranks pairs a human would judge
//! differently: the eye is most sensitive to green, and red/blue
//! sensitivity shifts with how bright the reds already are. The redmean
//! approximation weights the channel deltas by the mean red level:
//!
//! ```text
//! rMean = (r1 + r2) / 2
//! d = sqrt((2 + rMean/256)·dR² + 4·dG² + (2 + (255 - rMean)/256)·dB²)
//! ```
//!
//! The green term is fixed at 4; the red and blue weights trade off
//! against each other as `rMean` moves across 0..255. The result is not a
//! metric in any principled color space, but it tracks perceived
//! difference well enough for palette matching and is cheap to compute.

use crate::color::Rgb;

/// Compute the redmean distance between two colors.
///
/// Symmetric and non-negative; zero iff the colors are identical.
///
/// # Example
///
/// ```
/// use chromafit::{redmean, Rgb};
///
/// let a = Rgb::from_u24(0x8B4513);
/// let b = Rgb::from_u24(0x8B4513);
/// assert_eq!(redmean(a, b), 0.0);
/// ```
pub fn redmean(a: Rgb, b: Rgb) -> f64 {
    let r_mean = (a.r as f64 + b.r as f64) / 2.0;
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;

    let weight_r = 2.0 + r_mean / 256.0;
    let weight_b = 2.0 + (255.0 - r_mean) / 256.0;

    (weight_r * dr * dr + 4.0 * dg * dg + weight_b * db * db).sqrt()
}

/// Compute the redmean distance between two hex color strings.
///
/// If either side fails to parse as a six-digit hex color the result is
/// `f64::INFINITY` — never an error. Bulk scoring over item color lists
/// must degrade gracefully on malformed input rather than abort, and an
/// infinitely-far color naturally falls into the "unrelated" scoring band.
///
/// # Example
///
/// ```
/// use chromafit::hex_distance;
///
/// assert_eq!(hex_distance("#8B4513", "#8B4513"), 0.0);
/// assert_eq!(hex_distance("#8B4513", "not a color"), f64::INFINITY);
/// ```
pub fn hex_distance(a: &str, b: &str) -> f64 {
    match (a.parse::<Rgb>(), b.parse::<Rgb>()) {
        (Ok(a), Ok(b)) => redmean(a, b),
        _ => f64::INFINITY,
    }
}
