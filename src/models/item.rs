//! Wardrobe item record.

use serde::{Deserialize, Serialize};

/// Garment category.
///
/// The closed set the engine reasons about; anything the surrounding app
/// cannot classify arrives as [`Category::Accessory`]-adjacent free text in
/// `subcategory` instead of widening this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Dress,
    Outerwear,
    Accessory,
}

impl Category {
    /// All categories, used to normalize entropy over the category space.
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Dress,
        Category::Outerwear,
        Category::Accessory,
    ];
}

/// Price tier of an item, when the commerce layer knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Budget,
    Mid,
    Premium,
    Luxury,
}

impl PriceTier {
    /// Tier as a 0..=1 level, used for investment-slider alignment.
    pub(crate) fn level(self) -> f64 {
        match self {
            PriceTier::Budget => 0.0,
            PriceTier::Mid => 1.0 / 3.0,
            PriceTier::Premium => 2.0 / 3.0,
            PriceTier::Luxury => 1.0,
        }
    }
}

/// A single wardrobe item as supplied by the item-management collaborator.
///
/// `colors` is the ordered hex color list extracted elsewhere (image
/// analysis is out of scope here); it may be empty, which means
/// "insufficient data", never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    /// Caller-assigned identifier, opaque to the engine.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Garment category.
    pub category: Category,

    /// Free-form refinement of the category ("t-shirt", "chelsea boot").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Hex colors (`#RRGGBB`), possibly empty.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Brand name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Price tier, when the commerce layer knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_tier: Option<PriceTier>,
}

impl WardrobeItem {
    /// True if the item carries at least one color.
    #[inline]
    pub fn has_color_data(&self) -> bool {
        !self.colors.is_empty()
    }
}
