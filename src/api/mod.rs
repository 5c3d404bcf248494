//! The engine facade.
//!
//! [`IntelligenceEngine`] bundles a palette catalog with the scoring and
//! reporting entry points. Configure it once with the fluent builder
//! methods, then call the `&self` methods from as many places as needed;
//! the engine holds no per-request state.

use std::sync::Arc;

use tracing::debug;

use crate::metrics::{aggregate, empty_report, MetricsCalculator};
use crate::models::{StyleProfile, WardrobeItem, WardrobeReport};
use crate::palette::{PaletteCatalog, SeasonalPalette};
use crate::score::{self, PaletteMatch, PaletteScores, DEFAULT_MATCH_THRESHOLD};

/// Scoring and reporting engine over a fixed palette catalog.
///
/// # Example
///
/// ```
/// use chromafit::IntelligenceEngine;
///
/// let engine = IntelligenceEngine::new().match_threshold(0.75);
/// let scores = engine.score_item(&["#8B4513".to_string()]);
/// let matches = engine.best_matches(&scores);
/// assert_eq!(matches[0].palette.to_string(), "Dark Autumn");
/// ```
#[derive(Debug, Clone)]
pub struct IntelligenceEngine {
    catalog: Arc<PaletteCatalog>,
    match_threshold: f64,
}

impl Default for IntelligenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IntelligenceEngine {
    /// Engine over the standard 12-palette catalog with the default
    /// match threshold.
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(PaletteCatalog::standard()))
    }

    /// Engine over a caller-provided catalog. The catalog is shared, not
    /// copied, so several engines can point at the same one.
    pub fn with_catalog(catalog: Arc<PaletteCatalog>) -> Self {
        Self {
            catalog,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Set the minimum score a palette needs to count as a best match.
    pub fn match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// The catalog this engine scores against.
    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    /// Score one item's colors against every palette in the catalog.
    pub fn score_item(&self, colors: &[String]) -> PaletteScores {
        score::score_item(&self.catalog, colors)
    }

    /// The palettes from `scores` at or above the configured threshold,
    /// strongest first.
    pub fn best_matches(&self, scores: &PaletteScores) -> Vec<PaletteMatch> {
        score::best_matches(scores, self.match_threshold)
    }

    /// Full wardrobe intelligence report for a collection.
    ///
    /// An empty collection produces the fixed all-zero MINIMAL report
    /// without running any calculator.
    pub fn report(
        &self,
        items: &[WardrobeItem],
        detected_palette: Option<SeasonalPalette>,
        profile: Option<&StyleProfile>,
    ) -> WardrobeReport {
        if items.is_empty() {
            debug!("empty wardrobe, returning fixed minimal report");
            return empty_report();
        }
        let metrics =
            MetricsCalculator::new(&self.catalog).calculate(items, detected_palette, profile);
        let report = aggregate(&metrics, items);
        debug!(
            items = items.len(),
            score = report.overall_score,
            tier = ?report.tier,
            "wardrobe report generated"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, WardrobeTier};

    fn item(category: Category, colors: &[&str]) -> WardrobeItem {
        WardrobeItem {
            id: "i".to_string(),
            name: String::new(),
            category,
            subcategory: None,
            colors: colors.iter().map(|c| c.to_string()).collect(),
            brand: None,
            price_tier: None,
        }
    }

    #[test]
    fn test_engine_scores_like_free_function() {
        let engine = IntelligenceEngine::new();
        let colors = vec!["#8B4513".to_string()];
        let via_engine = engine.score_item(&colors);
        let via_function = score::score_item(engine.catalog(), &colors);
        assert_eq!(via_engine, via_function);
    }

    #[test]
    fn test_threshold_is_applied() {
        let engine = IntelligenceEngine::new();
        let scores = engine.score_item(&["#8B4513".to_string()]);

        let strict = engine.clone().match_threshold(1.0).best_matches(&scores);
        assert!(strict.iter().all(|m| m.score >= 1.0));

        let lax = engine.match_threshold(0.0).best_matches(&scores);
        assert_eq!(lax.len(), 12, "zero threshold admits every palette");
    }

    #[test]
    fn test_shared_catalog() {
        let catalog = Arc::new(PaletteCatalog::standard());
        let a = IntelligenceEngine::with_catalog(Arc::clone(&catalog));
        let b = IntelligenceEngine::with_catalog(catalog);
        let colors = vec!["#FF69B4".to_string()];
        assert_eq!(a.score_item(&colors), b.score_item(&colors));
    }

    #[test]
    fn test_empty_wardrobe_report() {
        let report = IntelligenceEngine::new().report(&[], None, None);
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.tier, WardrobeTier::Minimal);
        assert_eq!(report.combo_potential, 0);
    }

    #[test]
    fn test_report_runs_end_to_end() {
        let engine = IntelligenceEngine::new();
        let items = vec![
            item(Category::Top, &["#8B4513"]),
            item(Category::Bottom, &["#654321"]),
            item(Category::Shoes, &["#000000"]),
        ];
        let report = engine.report(&items, Some(SeasonalPalette::DarkAutumn), None);
        assert!(report.overall_score <= 100);
        assert_eq!(report.combo_potential, 1);
        assert!(report.metrics.seasonal_compatibility > 0.0);
    }
}
