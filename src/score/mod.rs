//! Palette compatibility scoring.

mod best_match;
mod scorer;

pub use best_match::{best_matches, PaletteMatch, DEFAULT_MATCH_THRESHOLD};
pub use scorer::{
    score_item, PaletteScores, AVOID_CLASH_SCORE, GOOD_MATCH_DISTANCE, MAX_MEANINGFUL_DISTANCE,
    NO_COLOR_DATA_SCORE, PERFECT_MATCH_DISTANCE, UNRELATED_SCORE,
};
