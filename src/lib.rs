//! Color compatibility and wardrobe intelligence scoring.
//!
//! `chromafit` answers two questions about a clothing collection:
//!
//! 1. **Which seasonal color palettes suit this item?** Each item's hex
//!    colors are scored against a curated catalog of twelve seasonal
//!    palettes using the redmean color distance, producing a complete
//!    per-palette score map and a ranked list of best matches.
//! 2. **How healthy is this wardrobe?** Four dimensional metrics —
//!    variety, seasonal compatibility, archetype alignment, and color
//!    harmony — are aggregated into a single 0–100 score with a tier
//!    and actionable insights.
//!
//! # Quick start
//!
//! ```
//! use chromafit::{IntelligenceEngine, SeasonalPalette};
//!
//! let engine = IntelligenceEngine::new();
//!
//! // Score one item's colors against all twelve palettes.
//! let scores = engine.score_item(&["#8B4513".to_string()]);
//! assert_eq!(scores.get(SeasonalPalette::DarkAutumn), 1.0);
//!
//! // Rank the palettes that clear the match threshold.
//! let matches = engine.best_matches(&scores);
//! assert_eq!(matches[0].palette, SeasonalPalette::DarkAutumn);
//! ```
//!
//! # Why redmean?
//!
//! Plain Euclidean RGB distance treats the three channels as equally
//! perceptible, which they are not. The redmean approximation weights the
//! channels by the mean red level of the pair, tracking human perception
//! closely at a fraction of the cost of a full Lab conversion. Distances
//! range 0 to roughly 765 (black to white), and the scoring thresholds
//! ([`PERFECT_MATCH_DISTANCE`], [`GOOD_MATCH_DISTANCE`],
//! [`MAX_MEANINGFUL_DISTANCE`]) are calibrated against that scale.
//!
//! # Design notes
//!
//! - Scoring is total: malformed hex strings degrade a color's
//!   contribution to the unrelated floor instead of failing the item.
//!   The only hard error in the crate is an unknown palette name.
//! - Everything is a pure function of its inputs. Scoring the same item
//!   twice yields bit-identical maps; reports are ephemeral snapshots.
//! - Proximity to a palette's `avoid` list dominates any primary or
//!   secondary match.
//!
//! # Modules
//!
//! - [`color`] — RGB parsing and the redmean distance metric
//! - [`palette`] — the twelve seasonal palettes and their catalog
//! - [`score`] — per-item palette scoring and best-match ranking
//! - [`metrics`] — dimensional metrics and wardrobe health aggregation
//! - [`models`] — wardrobe items, style profiles, and report types
//! - [`api`] — the [`IntelligenceEngine`] facade

pub mod api;
pub mod color;
pub mod error;
pub mod metrics;
pub mod models;
pub mod palette;
pub mod score;


pub use api::IntelligenceEngine;
pub use color::{hex_distance, redmean, Rgb};
pub use error::{EngineError, ParseColorError};
pub use metrics::{
    aggregate, empty_report, MetricsCalculator, SEASONAL_UNANALYZED, WEIGHT_ARCHETYPE_ALIGNMENT,
    WEIGHT_COLOR_HARMONY, WEIGHT_SEASONAL_COMPATIBILITY, WEIGHT_VARIETY,
};
pub use models::{
    Category, Dimension, DimensionalMetrics, FitPreference, PriceTier, StyleProfile, StyleSliders,
    WardrobeItem, WardrobeReport, WardrobeTier,
};
pub use palette::{PaletteCatalog, PaletteDefinition, SeasonalPalette};
pub use score::{
    best_matches, score_item, PaletteMatch, PaletteScores, AVOID_CLASH_SCORE,
    DEFAULT_MATCH_THRESHOLD, GOOD_MATCH_DISTANCE, MAX_MEANINGFUL_DISTANCE, NO_COLOR_DATA_SCORE,
    PERFECT_MATCH_DISTANCE, UNRELATED_SCORE,
};
