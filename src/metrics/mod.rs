//! Dimensional metrics and wardrobe health aggregation.

mod calculator;
mod health;

pub use calculator::{MetricsCalculator, SEASONAL_UNANALYZED};
pub use health::{
    aggregate, empty_report, WEIGHT_ARCHETYPE_ALIGNMENT, WEIGHT_COLOR_HARMONY,
    WEIGHT_SEASONAL_COMPATIBILITY, WEIGHT_VARIETY,
};
