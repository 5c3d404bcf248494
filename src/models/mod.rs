//! Value objects exchanged with the surrounding application.
//!
//! These are the structured forms of the records the CRUD layer persists.
//! The engine consumes them read-only; it never stores anything itself.

mod item;
mod profile;
mod report;

pub use item::{Category, PriceTier, WardrobeItem};
pub use profile::{FitPreference, StyleProfile, StyleSliders};
pub use report::{Dimension, DimensionalMetrics, WardrobeReport, WardrobeTier};
