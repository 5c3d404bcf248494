//! The wardrobe intelligence report and its component values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four dimensions summarizing a wardrobe, in the fixed iteration
/// order used for tie breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Variety,
    SeasonalCompatibility,
    ArchetypeAlignment,
    ColorHarmony,
}

impl Dimension {
    /// The fixed iteration order: ties in strength/opportunity selection
    /// resolve to the first dimension encountered in this order.
    pub const ORDER: [Dimension; 4] = [
        Dimension::Variety,
        Dimension::SeasonalCompatibility,
        Dimension::ArchetypeAlignment,
        Dimension::ColorHarmony,
    ];
}

/// The four dimensional metrics, each normalized to [0, 1].
///
/// Always derived fresh from the full collection; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionalMetrics {
    /// Category/subcategory/color spread across the collection.
    pub variety: f64,
    /// Mean palette-score at the user's detected seasonal palette.
    pub seasonal_compatibility: f64,
    /// Fit between the collection and the user's style profile.
    pub archetype_alignment: f64,
    /// How well colors recur and cluster across the collection.
    pub color_harmony: f64,
}

impl DimensionalMetrics {
    /// The fixed all-zero result for an empty wardrobe.
    pub const EMPTY: DimensionalMetrics = DimensionalMetrics {
        variety: 0.0,
        seasonal_compatibility: 0.0,
        archetype_alignment: 0.0,
        color_harmony: 0.0,
    };

    /// The value of one dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Variety => self.variety,
            Dimension::SeasonalCompatibility => self.seasonal_compatibility,
            Dimension::ArchetypeAlignment => self.archetype_alignment,
            Dimension::ColorHarmony => self.color_harmony,
        }
    }
}

/// Discrete wardrobe health tier, derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WardrobeTier {
    Minimal,
    Balanced,
    Diverse,
    Expert,
}

/// The wardrobe intelligence report returned to the reporting layer.
///
/// Ephemeral and request-scoped: a snapshot of derived values, never
/// persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeReport {
    /// Weighted overall score, 0..=100.
    pub overall_score: u32,

    /// Tier classification of the overall score.
    pub tier: WardrobeTier,

    /// When this report was generated.
    pub generated_at: DateTime<Utc>,

    /// The four dimensional metrics the score was aggregated from.
    pub metrics: DimensionalMetrics,

    /// The strongest dimension.
    pub primary_strength: Dimension,

    /// The weakest dimension — the first thing to improve.
    pub primary_opportunity: Dimension,

    /// Capped estimate of distinct top × bottom × shoe outfit
    /// combinations.
    pub combo_potential: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(WardrobeTier::Minimal < WardrobeTier::Balanced);
        assert!(WardrobeTier::Balanced < WardrobeTier::Diverse);
        assert!(WardrobeTier::Diverse < WardrobeTier::Expert);
    }

    #[test]
    fn test_tier_wire_names() {
        assert_eq!(
            serde_json::to_string(&WardrobeTier::Minimal).unwrap(),
            "\"MINIMAL\""
        );
        assert_eq!(
            serde_json::to_string(&WardrobeTier::Expert).unwrap(),
            "\"EXPERT\""
        );
    }

    #[test]
    fn test_dimension_wire_names() {
        assert_eq!(
            serde_json::to_string(&Dimension::SeasonalCompatibility).unwrap(),
            "\"seasonalCompatibility\""
        );
    }

    #[test]
    fn test_metrics_get_matches_fields() {
        let metrics = DimensionalMetrics {
            variety: 0.1,
            seasonal_compatibility: 0.2,
            archetype_alignment: 0.3,
            color_harmony: 0.4,
        };
        assert_eq!(metrics.get(Dimension::Variety), 0.1);
        assert_eq!(metrics.get(Dimension::SeasonalCompatibility), 0.2);
        assert_eq!(metrics.get(Dimension::ArchetypeAlignment), 0.3);
        assert_eq!(metrics.get(Dimension::ColorHarmony), 0.4);
    }

    #[test]
    fn test_empty_metrics_are_all_zero() {
        for dimension in Dimension::ORDER {
            assert_eq!(DimensionalMetrics::EMPTY.get(dimension), 0.0);
        }
    }

    #[test]
    fn test_report_camel_case_wire_shape() {
        let report = WardrobeReport {
            overall_score: 72,
            tier: WardrobeTier::Diverse,
            generated_at: Utc::now(),
            metrics: DimensionalMetrics::EMPTY,
            primary_strength: Dimension::Variety,
            primary_opportunity: Dimension::ColorHarmony,
            combo_potential: 24,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("overallScore").is_some());
        assert!(json.get("comboPotential").is_some());
        assert!(json.get("generatedAt").is_some());
        assert_eq!(json["tier"], "DIVERSE");
    }
}
