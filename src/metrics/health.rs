//! Wardrobe health aggregation.
//!
//! Folds the four dimensional metrics into one 0–100 score with a
//! discrete tier and derived insights. The weights and tier cuts are
//! fixed product constants.

use chrono::Utc;

use crate::models::{
    Category, Dimension, DimensionalMetrics, WardrobeItem, WardrobeReport, WardrobeTier,
};

/// Dimension weights. Must sum to 1.0 (checked by test).
pub const WEIGHT_VARIETY: f64 = 0.35;
pub const WEIGHT_SEASONAL_COMPATIBILITY: f64 = 0.30;
pub const WEIGHT_ARCHETYPE_ALIGNMENT: f64 = 0.20;
pub const WEIGHT_COLOR_HARMONY: f64 = 0.15;

// Tier cuts, non-overlapping, checked highest-first.
const TIER_EXPERT_MIN: u32 = 80;
const TIER_DIVERSE_MIN: u32 = 65;
const TIER_BALANCED_MIN: u32 = 50;

/// Cap on the outfit-combination estimate: a small wardrobe should never
/// be advertised as holding thousands of "unique" outfits.
const COMBO_POTENTIAL_CAP: u32 = 999;

fn weight(dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Variety => WEIGHT_VARIETY,
        Dimension::SeasonalCompatibility => WEIGHT_SEASONAL_COMPATIBILITY,
        Dimension::ArchetypeAlignment => WEIGHT_ARCHETYPE_ALIGNMENT,
        Dimension::ColorHarmony => WEIGHT_COLOR_HARMONY,
    }
}

fn tier_for(score: u32) -> WardrobeTier {
    if score >= TIER_EXPERT_MIN {
        WardrobeTier::Expert
    } else if score >= TIER_DIVERSE_MIN {
        WardrobeTier::Diverse
    } else if score >= TIER_BALANCED_MIN {
        WardrobeTier::Balanced
    } else {
        WardrobeTier::Minimal
    }
}

/// The dimension with the maximum value; ties resolve to the first in
/// [`Dimension::ORDER`].
fn strongest(metrics: &DimensionalMetrics) -> Dimension {
    let mut best = Dimension::ORDER[0];
    for dimension in Dimension::ORDER {
        if metrics.get(dimension) > metrics.get(best) {
            best = dimension;
        }
    }
    best
}

/// The dimension with the minimum value; ties resolve to the first in
/// [`Dimension::ORDER`].
fn weakest(metrics: &DimensionalMetrics) -> Dimension {
    let mut worst = Dimension::ORDER[0];
    for dimension in Dimension::ORDER {
        if metrics.get(dimension) < metrics.get(worst) {
            worst = dimension;
        }
    }
    worst
}

/// Approximate count of distinct top × bottom × shoe combinations, capped
/// at [`COMBO_POTENTIAL_CAP`]. A missing category counts as 1 so one bare
/// dimension does not zero the whole estimate.
fn combo_potential(items: &[WardrobeItem]) -> u32 {
    let count = |category: Category| -> u64 {
        (items.iter().filter(|i| i.category == category).count() as u64).max(1)
    };
    let combos = count(Category::Top) * count(Category::Bottom) * count(Category::Shoes);
    combos.min(COMBO_POTENTIAL_CAP as u64) as u32
}

/// Aggregate the four metrics into a wardrobe intelligence report.
///
/// `overall = round(Σ weight · dimension · 100)`. The item slice is only
/// consulted for the combination estimate; the metrics are taken as
/// given.
///
/// # Example
///
/// ```
/// use chromafit::{aggregate, DimensionalMetrics, WardrobeTier};
///
/// let metrics = DimensionalMetrics {
///     variety: 0.9,
///     seasonal_compatibility: 0.9,
///     archetype_alignment: 0.9,
///     color_harmony: 0.9,
/// };
/// let report = aggregate(&metrics, &[]);
/// assert_eq!(report.overall_score, 90);
/// assert_eq!(report.tier, WardrobeTier::Expert);
/// ```
pub fn aggregate(metrics: &DimensionalMetrics, items: &[WardrobeItem]) -> WardrobeReport {
    let weighted: f64 = Dimension::ORDER
        .iter()
        .map(|&d| weight(d) * metrics.get(d))
        .sum();
    let overall_score = (weighted * 100.0).round() as u32;

    WardrobeReport {
        overall_score,
        tier: tier_for(overall_score),
        generated_at: Utc::now(),
        metrics: *metrics,
        primary_strength: strongest(metrics),
        primary_opportunity: weakest(metrics),
        combo_potential: combo_potential(items),
    }
}

/// The fixed report for an empty wardrobe: all zeros, [`WardrobeTier::
/// Minimal`], no combination potential. Produced before any dimensional
/// calculator runs.
pub fn empty_report() -> WardrobeReport {
    WardrobeReport {
        overall_score: 0,
        tier: WardrobeTier::Minimal,
        generated_at: Utc::now(),
        metrics: DimensionalMetrics::EMPTY,
        primary_strength: Dimension::ORDER[0],
        primary_opportunity: Dimension::ORDER[0],
        combo_potential: 0,
    }
}
