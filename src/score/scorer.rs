//! Tiered palette compatibility scoring.
//!
//! Scores an item's colors against each of the twelve seasonal palettes.
//! The thresholds and score bands here are empirical design constants, not
//! derived from a principled model; they were tuned against curated
//! outfits and must stay as named constants so future tuning is localized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{redmean, Rgb};
use crate::palette::{PaletteCatalog, PaletteDefinition, SeasonalPalette};

/// Distance below which a color counts as an exact tonal match.
pub const PERFECT_MATCH_DISTANCE: f64 = 30.0;

/// Distance up to which a color still reads as a good match.
pub const GOOD_MATCH_DISTANCE: f64 = 80.0;

/// Distance beyond which two colors are essentially unrelated.
pub const MAX_MEANINGFUL_DISTANCE: f64 = 200.0;

/// Per-color score when the color clashes with an `avoid` entry.
/// Avoidance dominates: a clash is penalized no matter how well the color
/// might otherwise match `primary` or `secondary`.
pub const AVOID_CLASH_SCORE: f64 = 0.1;

/// Per-palette score for an item with no colors at all ("no information",
/// not an error).
pub const NO_COLOR_DATA_SCORE: f64 = 0.5;

/// Flat per-color score past [`MAX_MEANINGFUL_DISTANCE`].
pub const UNRELATED_SCORE: f64 = 0.2;

/// Floor of the near-primary interpolation band.
const PRIMARY_BAND_FLOOR: f64 = 0.85;

/// Score for a color sitting right on a `secondary` entry.
const SECONDARY_MATCH_SCORE: f64 = 0.8;

/// Floor of the near-secondary interpolation band.
const SECONDARY_BAND_FLOOR: f64 = 0.6;

/// A complete per-item score map: every one of the twelve palettes mapped
/// to a compatibility score in [0, 1].
///
/// Iteration is in catalog order. There is no cross-palette normalization;
/// the twelve scores are independent and need not sum to anything.
/// Serializes as an object keyed by the twelve catalog names, which is the
/// shape the surrounding item-management layer persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteScores {
    scores: BTreeMap<SeasonalPalette, f64>,
}

impl PaletteScores {
    /// The score for one palette.
    #[inline]
    pub fn get(&self, palette: SeasonalPalette) -> f64 {
        self.scores
            .get(&palette)
            .copied()
            .unwrap_or(NO_COLOR_DATA_SCORE)
    }

    /// Iterate `(palette, score)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (SeasonalPalette, f64)> + '_ {
        self.scores.iter().map(|(&p, &s)| (p, s))
    }
}

/// Minimum redmean distance from `color` to any entry in `list`.
///
/// An unparseable color (`None`) is infinitely far from everything, so a
/// malformed input degrades that color's contribution instead of aborting
/// the item's scoring.
fn min_distance(color: Option<Rgb>, list: &[Rgb]) -> f64 {
    match color {
        Some(c) => list
            .iter()
            .map(|&entry| redmean(c, entry))
            .fold(f64::INFINITY, f64::min),
        None => f64::INFINITY,
    }
}

/// Score a single color against one palette definition.
///
/// Tier order is load-bearing:
/// 1. avoid clash (min avoid distance under [`PERFECT_MATCH_DISTANCE`])
///    short-circuits to [`AVOID_CLASH_SCORE`];
/// 2. near-primary: 1.0 under the perfect threshold, then linear down to
///    [`PRIMARY_BAND_FLOOR`] at [`GOOD_MATCH_DISTANCE`];
/// 3. near-secondary: [`SECONDARY_MATCH_SCORE`] under the perfect
///    threshold, then linear down to [`SECONDARY_BAND_FLOOR`];
/// 4. fallback: interpolate on `min(primary, secondary)` distance — the
///    same distances that already failed steps 2–3. That reuse makes the
///    band boundary a continuous but non-obvious blend; it is intentional
///    and must not be "fixed" without a product decision.
fn color_score(color: Option<Rgb>, def: &PaletteDefinition) -> f64 {
    if min_distance(color, &def.avoid) < PERFECT_MATCH_DISTANCE {
        return AVOID_CLASH_SCORE;
    }

    let band = GOOD_MATCH_DISTANCE - PERFECT_MATCH_DISTANCE;

    let primary = min_distance(color, &def.primary);
    if primary < PERFECT_MATCH_DISTANCE {
        return 1.0;
    }
    if primary <= GOOD_MATCH_DISTANCE {
        let t = (primary - PERFECT_MATCH_DISTANCE) / band;
        return 1.0 - (1.0 - PRIMARY_BAND_FLOOR) * t;
    }

    let secondary = min_distance(color, &def.secondary);
    if secondary < PERFECT_MATCH_DISTANCE {
        return SECONDARY_MATCH_SCORE;
    }
    if secondary <= GOOD_MATCH_DISTANCE {
        let t = (secondary - PERFECT_MATCH_DISTANCE) / band;
        return SECONDARY_MATCH_SCORE - (SECONDARY_MATCH_SCORE - SECONDARY_BAND_FLOOR) * t;
    }

    let nearest = primary.min(secondary);
    if nearest > MAX_MEANINGFUL_DISTANCE {
        return UNRELATED_SCORE;
    }
    let t = (nearest - GOOD_MATCH_DISTANCE) / (MAX_MEANINGFUL_DISTANCE - GOOD_MATCH_DISTANCE);
    SECONDARY_BAND_FLOOR - (SECONDARY_BAND_FLOOR - UNRELATED_SCORE) * t
}

/// Round a score to two decimals, the precision persisted by callers.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute an item's full palette score map.
///
/// Each of the twelve palettes is scored independently: the per-palette
/// score is the arithmetic mean of the per-color scores, rounded to two
/// decimals. An item with zero colors scores exactly
/// [`NO_COLOR_DATA_SCORE`] against every palette.
///
/// Pure function of `(catalog, colors)`: no side effects, bit-identical
/// results on repeated calls.
///
/// # Example
///
/// ```
/// use chromafit::{score_item, PaletteCatalog, SeasonalPalette};
///
/// let catalog = PaletteCatalog::standard();
/// let scores = score_item(&catalog, &["#8B4513".to_string()]);
/// assert_eq!(scores.get(SeasonalPalette::DarkAutumn), 1.0);
/// ```
pub fn score_item(catalog: &PaletteCatalog, colors: &[String]) -> PaletteScores {
    let parsed: Vec<Option<Rgb>> = colors.iter().map(|s| s.parse().ok()).collect();

    let scores = catalog
        .iter()
        .map(|(palette, def)| {
            let score = if parsed.is_empty() {
                NO_COLOR_DATA_SCORE
            } else {
                let sum: f64 = parsed.iter().map(|&c| color_score(c, def)).sum();
                round2(sum / parsed.len() as f64)
            };
            (palette, score)
        })
        .collect();

    debug!(colors = colors.len(), "computed palette score map");
    PaletteScores { scores }
}
