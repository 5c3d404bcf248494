//! Best-match selection over a palette score map.

use serde::Serialize;

use crate::palette::SeasonalPalette;
use crate::score::PaletteScores;

/// Default score threshold for a palette to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

/// One matching palette with its compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteMatch {
    /// The matching seasonal palette.
    pub palette: SeasonalPalette,
    /// Its compatibility score, `>= threshold`.
    pub score: f64,
}

/// Rank the palettes that suit an item.
///
/// Filters the score map to scores at or above `threshold` and sorts
/// descending by score. The sort is stable and the input iterates in
/// catalog order, so ties resolve to catalog order — no randomness.
///
/// # Example
///
/// ```
/// use chromafit::{best_matches, score_item, PaletteCatalog, SeasonalPalette, DEFAULT_MATCH_THRESHOLD};
///
/// let catalog = PaletteCatalog::standard();
/// let scores = score_item(&catalog, &["#8B4513".to_string()]);
/// let matches = best_matches(&scores, DEFAULT_MATCH_THRESHOLD);
/// assert_eq!(matches[0].palette, SeasonalPalette::DarkAutumn);
/// ```
pub fn best_matches(scores: &PaletteScores, threshold: f64) -> Vec<PaletteMatch> {
    let mut matches: Vec<PaletteMatch> = scores
        .iter()
        .filter(|&(_, score)| score >= threshold)
        .map(|(palette, score)| PaletteMatch { palette, score })
        .collect();
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}
