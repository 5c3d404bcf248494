//! Style profile record.
//!
//! The source data model allowed loosely-typed preference blobs; here the
//! preferences are explicit named fields so the metrics calculator's
//! contract is checkable at compile time.

use serde::{Deserialize, Serialize};

/// Numeric style preference sliders, each 0..=100.
///
/// Missing sliders deserialize to the neutral midpoint 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSliders {
    /// 0 = strictly casual, 100 = strictly formal.
    #[serde(default = "neutral_slider")]
    pub formality: u8,

    /// 0 = monochrome minimalist, 100 = maximal color.
    #[serde(default = "neutral_slider")]
    pub colorfulness: u8,

    /// 0 = budget-driven, 100 = investment pieces only.
    #[serde(default = "neutral_slider")]
    pub investment: u8,
}

fn neutral_slider() -> u8 {
    50
}

impl Default for StyleSliders {
    fn default() -> Self {
        Self {
            formality: 50,
            colorfulness: 50,
            investment: 50,
        }
    }
}

/// Preferred garment fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPreference {
    Slim,
    Regular,
    Relaxed,
    Oversized,
}

/// A user's style profile, as maintained by the profile collaborator.
///
/// Entirely optional from the engine's perspective: without one, the
/// archetype-alignment dimension reads 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Named style archetype ("classic", "avant-garde", ...), free text
    /// owned by the profile layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,

    /// Numeric preference sliders.
    #[serde(default)]
    pub sliders: StyleSliders,

    /// Favorite brand names, matched case-insensitively against item
    /// brands.
    #[serde(default)]
    pub favorite_brands: Vec<String>,

    /// Preferred fit, when stated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_preference: Option<FitPreference>,
}
