//! The four dimensional metrics over a user's collection.
//!
//! Each metric is a pure function of the collection (plus the optional
//! detected palette and style profile) normalized to [0, 1]. Nothing here
//! is persisted: every intelligence request recomputes all four from
//! scratch.

use tracing::debug;

use crate::color::{redmean, Rgb};
use crate::models::{Category, DimensionalMetrics, StyleProfile, WardrobeItem};
use crate::palette::{PaletteCatalog, SeasonalPalette};
use crate::score::score_item;

/// Seasonal-compatibility value when the user has not completed a color
/// analysis (no detected palette) or no item carries color data. Low but
/// not zero: "unknown", not "incompatible".
pub const SEASONAL_UNANALYZED: f64 = 0.3;

/// Collection size at which the variety damping factor reaches 1.0. A
/// three-item wardrobe cannot read as maximally varied no matter how
/// spread its categories are.
const VARIETY_TARGET_ITEMS: f64 = 12.0;

/// Redmean distance under which two distinct colors belong to the same
/// harmony cluster.
const HARMONY_CLUSTER_DISTANCE: f64 = 120.0;

// Variety blend weights.
const VARIETY_ENTROPY_WEIGHT: f64 = 0.45;
const VARIETY_SUBCATEGORY_WEIGHT: f64 = 0.30;
const VARIETY_COLOR_WEIGHT: f64 = 0.25;

// Harmony blend weights.
const HARMONY_CLUSTER_WEIGHT: f64 = 0.7;
const HARMONY_RECURRENCE_WEIGHT: f64 = 0.3;

/// Categories that read as formal for the formality-slider signal.
const FORMAL_CATEGORIES: [Category; 2] = [Category::Dress, Category::Outerwear];

/// Distinct colors per item at which the colorfulness signal saturates.
const COLORFULNESS_SATURATION: f64 = 3.0;

/// Computes the four dimensional metrics for a collection.
///
/// Borrows the shared immutable catalog; safe to use concurrently from
/// many request handlers.
#[derive(Debug)]
pub struct MetricsCalculator<'a> {
    catalog: &'a PaletteCatalog,
}

impl<'a> MetricsCalculator<'a> {
    /// Create a calculator over the given catalog.
    pub fn new(catalog: &'a PaletteCatalog) -> Self {
        Self { catalog }
    }

    /// Compute all four metrics.
    ///
    /// An empty collection short-circuits to
    /// [`DimensionalMetrics::EMPTY`] before any calculator runs — a
    /// deliberate special case, not a fallthrough of the normal math.
    pub fn calculate(
        &self,
        items: &[WardrobeItem],
        detected_palette: Option<SeasonalPalette>,
        profile: Option<&StyleProfile>,
    ) -> DimensionalMetrics {
        if items.is_empty() {
            return DimensionalMetrics::EMPTY;
        }

        let metrics = DimensionalMetrics {
            variety: variety(items),
            seasonal_compatibility: self.seasonal_compatibility(items, detected_palette),
            archetype_alignment: archetype_alignment(items, profile),
            color_harmony: color_harmony(items),
        };
        debug!(
            items = items.len(),
            variety = metrics.variety,
            seasonal = metrics.seasonal_compatibility,
            archetype = metrics.archetype_alignment,
            harmony = metrics.color_harmony,
            "computed dimensional metrics"
        );
        metrics
    }

    /// Mean palette score at the detected palette, over items that carry
    /// color data. [`SEASONAL_UNANALYZED`] when there is no detected
    /// palette or no item has colors.
    fn seasonal_compatibility(
        &self,
        items: &[WardrobeItem],
        detected_palette: Option<SeasonalPalette>,
    ) -> f64 {
        let Some(palette) = detected_palette else {
            return SEASONAL_UNANALYZED;
        };

        let scores: Vec<f64> = items
            .iter()
            .filter(|item| item.has_color_data())
            .map(|item| score_item(self.catalog, &item.colors).get(palette))
            .collect();

        if scores.is_empty() {
            return SEASONAL_UNANALYZED;
        }
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Category/subcategory/color spread.
///
/// Blend of normalized category entropy, distinct category+subcategory
/// pair ratio, and distinct-color ratio, damped by collection size so a
/// handful of items cannot max the dimension.
fn variety(items: &[WardrobeItem]) -> f64 {
    let n = items.len() as f64;

    let mut category_counts = [0usize; Category::ALL.len()];
    for item in items {
        category_counts[item.category as usize] += 1;
    }
    let entropy: f64 = category_counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.ln()
        })
        .sum();
    let entropy_norm = entropy / (Category::ALL.len() as f64).ln();

    let mut pairs: Vec<(Category, Option<&str>)> = items
        .iter()
        .map(|item| (item.category, item.subcategory.as_deref()))
        .collect();
    pairs.sort();
    pairs.dedup();
    let pair_ratio = pairs.len() as f64 / n;

    let spread = color_spread(items);

    let raw = VARIETY_ENTROPY_WEIGHT * entropy_norm
        + VARIETY_SUBCATEGORY_WEIGHT * pair_ratio
        + VARIETY_COLOR_WEIGHT * spread;
    raw * (n / VARIETY_TARGET_ITEMS).min(1.0)
}

/// Distinct valid colors over total valid color occurrences; 0 when the
/// collection carries no parseable color at all.
fn color_spread(items: &[WardrobeItem]) -> f64 {
    let occurrences = valid_colors(items);
    if occurrences.is_empty() {
        return 0.0;
    }
    let mut distinct = occurrences.clone();
    distinct.sort();
    distinct.dedup();
    distinct.len() as f64 / occurrences.len() as f64
}

/// All parseable colors across the collection, in first-seen order,
/// duplicates preserved. Malformed entries are skipped, never an error.
fn valid_colors(items: &[WardrobeItem]) -> Vec<Rgb> {
    items
        .iter()
        .flat_map(|item| item.colors.iter())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Fit between the collection and the style profile: mean of the signals
/// that are evaluable. 0 without a profile.
fn archetype_alignment(items: &[WardrobeItem], profile: Option<&StyleProfile>) -> f64 {
    let Some(profile) = profile else {
        return 0.0;
    };
    let n = items.len() as f64;
    let mut signals: Vec<f64> = Vec::with_capacity(4);

    if !profile.favorite_brands.is_empty() {
        let favorites: Vec<String> = profile
            .favorite_brands
            .iter()
            .map(|b| b.to_lowercase())
            .collect();
        let matching = items
            .iter()
            .filter_map(|item| item.brand.as_deref())
            .filter(|brand| favorites.contains(&brand.to_lowercase()))
            .count();
        signals.push(matching as f64 / n);
    }

    let formal_share = items
        .iter()
        .filter(|item| FORMAL_CATEGORIES.contains(&item.category))
        .count() as f64
        / n;
    signals.push(1.0 - (profile.sliders.formality as f64 / 100.0 - formal_share).abs());

    let color_density = items
        .iter()
        .map(|item| {
            let mut distinct: Vec<Rgb> = item.colors.iter().filter_map(|s| s.parse().ok()).collect();
            distinct.sort();
            distinct.dedup();
            (distinct.len() as f64 / COLORFULNESS_SATURATION).min(1.0)
        })
        .sum::<f64>()
        / n;
    signals.push(1.0 - (profile.sliders.colorfulness as f64 / 100.0 - color_density).abs());

    let tiers: Vec<f64> = items
        .iter()
        .filter_map(|item| item.price_tier)
        .map(|tier| tier.level())
        .collect();
    if !tiers.is_empty() {
        let mean_tier = tiers.iter().sum::<f64>() / tiers.len() as f64;
        signals.push(1.0 - (profile.sliders.investment as f64 / 100.0 - mean_tier).abs());
    }

    signals.iter().sum::<f64>() / signals.len() as f64
}

/// How well colors recur and cluster across the collection, independent of
/// seasonal palettes.
///
/// Distinct colors are greedily clustered: a color joins the first cluster
/// whose representative (first-seen member) is within
/// [`HARMONY_CLUSTER_DISTANCE`]. Few clusters over many distinct colors
/// means a coherent palette; one cluster is perfect harmony, all
/// singletons is chaotic scatter. A recurrence term rewards repeated
/// exact colors.
fn color_harmony(items: &[WardrobeItem]) -> f64 {
    let occurrences = valid_colors(items);
    if occurrences.is_empty() {
        return 0.0;
    }

    let mut distinct: Vec<Rgb> = Vec::new();
    for &color in &occurrences {
        if !distinct.contains(&color) {
            distinct.push(color);
        }
    }
    if distinct.len() == 1 {
        return 1.0;
    }

    let mut representatives: Vec<Rgb> = Vec::new();
    for &color in &distinct {
        let clustered = representatives
            .iter()
            .any(|&rep| redmean(color, rep) <= HARMONY_CLUSTER_DISTANCE);
        if !clustered {
            representatives.push(color);
        }
    }

    let cluster_ratio =
        1.0 - (representatives.len() - 1) as f64 / (distinct.len() - 1) as f64;
    let recurrence = 1.0 - distinct.len() as f64 / occurrences.len() as f64;

    HARMONY_CLUSTER_WEIGHT * cluster_ratio + HARMONY_RECURRENCE_WEIGHT * recurrence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceTier, StyleSliders};

    fn item(id: &str, category: Category, colors: &[&str]) -> WardrobeItem {
        WardrobeItem {
            id: id.to_string(),
            name: String::new(),
            category,
            subcategory: None,
            colors: colors.iter().map(|s| s.to_string()).collect(),
            brand: None,
            price_tier: None,
        }
    }

    fn catalog() -> PaletteCatalog {
        PaletteCatalog::standard()
    }

    #[test]
    fn test_empty_collection_short_circuits() {
        let catalog = catalog();
        let calc = MetricsCalculator::new(&catalog);
        let metrics = calc.calculate(&[], Some(SeasonalPalette::DarkAutumn), None);
        assert_eq!(metrics, DimensionalMetrics::EMPTY);
    }

    #[test]
    fn test_metrics_within_bounds() {
        let catalog = catalog();
        let calc = MetricsCalculator::new(&catalog);
        let items = vec![
            item("a", Category::Top, &["#8B4513", "#654321"]),
            item("b", Category::Bottom, &["#000000"]),
            item("c", Category::Shoes, &["#8B4513"]),
            item("d", Category::Dress, &[]),
        ];
        let profile = StyleProfile::default();
        let metrics = calc.calculate(&items, Some(SeasonalPalette::DarkAutumn), Some(&profile));
        for dimension in crate::models::Dimension::ORDER {
            let value = metrics.get(dimension);
            assert!(
                (0.0..=1.0).contains(&value),
                "{dimension:?} out of bounds: {value}"
            );
        }
    }

    #[test]
    fn test_variety_rises_with_category_spread() {
        let uniform = vec![
            item("a", Category::Top, &["#000000"]),
            item("b", Category::Top, &["#000000"]),
            item("c", Category::Top, &["#000000"]),
            item("d", Category::Top, &["#000000"]),
        ];
        let spread = vec![
            item("a", Category::Top, &["#000000"]),
            item("b", Category::Bottom, &["#FFFFFF"]),
            item("c", Category::Shoes, &["#8B4513"]),
            item("d", Category::Dress, &["#191970"]),
        ];
        assert!(
            variety(&spread) > variety(&uniform),
            "{} vs {}",
            variety(&spread),
            variety(&uniform)
        );
    }

    #[test]
    fn test_variety_damped_for_tiny_collections() {
        let one = vec![item("a", Category::Top, &["#FF0000"])];
        assert!(
            variety(&one) < 0.2,
            "single-item wardrobe should read low: {}",
            variety(&one)
        );
    }

    #[test]
    fn test_seasonal_uses_detected_palette() {
        let catalog = catalog();
        let calc = MetricsCalculator::new(&catalog);
        // Both colors are Dark Autumn primaries.
        let items = vec![
            item("a", Category::Top, &["#8B4513"]),
            item("b", Category::Bottom, &["#654321"]),
        ];
        let metrics = calc.calculate(&items, Some(SeasonalPalette::DarkAutumn), None);
        assert_eq!(metrics.seasonal_compatibility, 1.0);
    }

    #[test]
    fn test_seasonal_default_without_detected_palette() {
        let catalog = catalog();
        let calc = MetricsCalculator::new(&catalog);
        let items = vec![item("a", Category::Top, &["#8B4513"])];
        let metrics = calc.calculate(&items, None, None);
        assert_eq!(metrics.seasonal_compatibility, SEASONAL_UNANALYZED);
    }

    #[test]
    fn test_seasonal_default_when_no_item_has_colors() {
        let catalog = catalog();
        let calc = MetricsCalculator::new(&catalog);
        let items = vec![item("a", Category::Top, &[])];
        let metrics = calc.calculate(&items, Some(SeasonalPalette::CoolWinter), None);
        assert_eq!(metrics.seasonal_compatibility, SEASONAL_UNANALYZED);
    }

    #[test]
    fn test_archetype_zero_without_profile() {
        let items = vec![item("a", Category::Top, &["#000000"])];
        assert_eq!(archetype_alignment(&items, None), 0.0);
    }

    #[test]
    fn test_archetype_brand_affinity() {
        let mut loved = item("a", Category::Top, &["#000000"]);
        loved.brand = Some("Acne".to_string());
        let mut other = item("b", Category::Bottom, &["#000000"]);
        other.brand = Some("Unknown".to_string());

        let matching_profile = StyleProfile {
            favorite_brands: vec!["acne".to_string()],
            ..Default::default()
        };
        let unmatched_profile = StyleProfile {
            favorite_brands: vec!["Margiela".to_string()],
            ..Default::default()
        };

        let items = vec![loved, other];
        let with_match = archetype_alignment(&items, Some(&matching_profile));
        let without_match = archetype_alignment(&items, Some(&unmatched_profile));
        assert!(
            with_match > without_match,
            "{with_match} vs {without_match}"
        );
    }

    #[test]
    fn test_archetype_formality_signal() {
        // All-formal collection against a fully formal slider.
        let items = vec![
            item("a", Category::Dress, &[]),
            item("b", Category::Outerwear, &[]),
        ];
        let formal = StyleProfile {
            sliders: StyleSliders {
                formality: 100,
                colorfulness: 0,
                investment: 50,
            },
            ..Default::default()
        };
        let casual = StyleProfile {
            sliders: StyleSliders {
                formality: 0,
                colorfulness: 0,
                investment: 50,
            },
            ..Default::default()
        };
        assert!(
            archetype_alignment(&items, Some(&formal))
                > archetype_alignment(&items, Some(&casual))
        );
    }

    #[test]
    fn test_archetype_investment_needs_price_data() {
        // Without any price tiers the investment signal is skipped, so
        // changing the slider alone must not move the score.
        let items = vec![item("a", Category::Top, &[])];
        let low = StyleProfile {
            sliders: StyleSliders {
                formality: 50,
                colorfulness: 50,
                investment: 0,
            },
            ..Default::default()
        };
        let high = StyleProfile {
            sliders: StyleSliders {
                formality: 50,
                colorfulness: 50,
                investment: 100,
            },
            ..Default::default()
        };
        assert_eq!(
            archetype_alignment(&items, Some(&low)),
            archetype_alignment(&items, Some(&high))
        );

        let mut priced = item("b", Category::Top, &[]);
        priced.price_tier = Some(PriceTier::Luxury);
        let items = vec![priced];
        assert!(
            archetype_alignment(&items, Some(&high)) > archetype_alignment(&items, Some(&low))
        );
    }

    #[test]
    fn test_harmony_zero_without_color_data() {
        let items = vec![item("a", Category::Top, &[]), item("b", Category::Top, &[])];
        assert_eq!(color_harmony(&items), 0.0);
    }

    #[test]
    fn test_harmony_single_color_is_perfect() {
        let items = vec![
            item("a", Category::Top, &["#8B4513"]),
            item("b", Category::Bottom, &["#8b4513"]),
        ];
        assert_eq!(color_harmony(&items), 1.0);
    }

    #[test]
    fn test_harmony_coherent_beats_scatter() {
        // Near-identical browns vs. maximally scattered hues.
        let coherent = vec![
            item("a", Category::Top, &["#8B4513", "#8E4815"]),
            item("b", Category::Bottom, &["#654321", "#6A4826"]),
        ];
        let scattered = vec![
            item("a", Category::Top, &["#FF0000", "#00FF00"]),
            item("b", Category::Bottom, &["#0000FF", "#FFFF00"]),
        ];
        assert!(
            color_harmony(&coherent) > color_harmony(&scattered),
            "{} vs {}",
            color_harmony(&coherent),
            color_harmony(&scattered)
        );
    }

    #[test]
    fn test_harmony_skips_malformed_colors() {
        let items = vec![item("a", Category::Top, &["#8B4513", "not-a-color"])];
        // Malformed entry is ignored, leaving one distinct color.
        assert_eq!(color_harmony(&items), 1.0);
    }
}
