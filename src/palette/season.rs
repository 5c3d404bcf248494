//! The twelve seasonal palette archetypes.
//!
//! This is a closed, versioned vocabulary: callers persisting a palette
//! label must use exactly these twelve names. Adding a name is a breaking
//! schema change for every stored score map, which is why the type is an
//! enum and not a string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the twelve fixed seasonal color archetypes.
///
/// Declaration order is the canonical catalog order. It determines the
/// iteration order of score maps and breaks ties in best-match ranking,
/// so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeasonalPalette {
    #[serde(rename = "Dark Autumn")]
    DarkAutumn,
    #[serde(rename = "Dark Winter")]
    DarkWinter,
    #[serde(rename = "Light Spring")]
    LightSpring,
    #[serde(rename = "Light Summer")]
    LightSummer,
    #[serde(rename = "Muted Autumn")]
    MutedAutumn,
    #[serde(rename = "Muted Summer")]
    MutedSummer,
    #[serde(rename = "Bright Winter")]
    BrightWinter,
    #[serde(rename = "Bright Spring")]
    BrightSpring,
    #[serde(rename = "Warm Autumn")]
    WarmAutumn,
    #[serde(rename = "Warm Spring")]
    WarmSpring,
    #[serde(rename = "Cool Winter")]
    CoolWinter,
    #[serde(rename = "Cool Summer")]
    CoolSummer,
}

impl SeasonalPalette {
    /// All twelve palettes in canonical catalog order.
    pub const ALL: [SeasonalPalette; 12] = [
        SeasonalPalette::DarkAutumn,
        SeasonalPalette::DarkWinter,
        SeasonalPalette::LightSpring,
        SeasonalPalette::LightSummer,
        SeasonalPalette::MutedAutumn,
        SeasonalPalette::MutedSummer,
        SeasonalPalette::BrightWinter,
        SeasonalPalette::BrightSpring,
        SeasonalPalette::WarmAutumn,
        SeasonalPalette::WarmSpring,
        SeasonalPalette::CoolWinter,
        SeasonalPalette::CoolSummer,
    ];

    /// The catalog name for this palette.
    pub const fn as_str(self) -> &'static str {
        match self {
            SeasonalPalette::DarkAutumn => "Dark Autumn",
            SeasonalPalette::DarkWinter => "Dark Winter",
            SeasonalPalette::LightSpring => "Light Spring",
            SeasonalPalette::LightSummer => "Light Summer",
            SeasonalPalette::MutedAutumn => "Muted Autumn",
            SeasonalPalette::MutedSummer => "Muted Summer",
            SeasonalPalette::BrightWinter => "Bright Winter",
            SeasonalPalette::BrightSpring => "Bright Spring",
            SeasonalPalette::WarmAutumn => "Warm Autumn",
            SeasonalPalette::WarmSpring => "Warm Spring",
            SeasonalPalette::CoolWinter => "Cool Winter",
            SeasonalPalette::CoolSummer => "Cool Summer",
        }
    }

    /// Position in the canonical catalog order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SeasonalPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonalPalette {
    type Err = EngineError;

    /// Parse a palette label.
    ///
    /// Matches the twelve catalog names exactly (case-sensitive): persisted
    /// labels are required to use the canonical spelling, and anything else
    /// is a vocabulary violation, which is the one hard failure in this
    /// engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeasonalPalette::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| EngineError::UnknownPalette(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_twelve_distinct_names() {
        assert_eq!(SeasonalPalette::ALL.len(), 12);
        let mut names: Vec<&str> = SeasonalPalette::ALL.iter().map(|p| p.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 12, "palette names must be unique");
    }

    #[test]
    fn test_name_round_trip() {
        for palette in SeasonalPalette::ALL {
            let parsed: SeasonalPalette = palette.as_str().parse().unwrap();
            assert_eq!(parsed, palette);
        }
    }

    #[test]
    fn test_unknown_name_is_hard_error() {
        let result = "Dark autumn".parse::<SeasonalPalette>();
        assert!(matches!(result, Err(EngineError::UnknownPalette(_))));

        let result = "Neon Winter".parse::<SeasonalPalette>();
        assert!(matches!(result, Err(EngineError::UnknownPalette(_))));
    }

    #[test]
    fn test_index_matches_catalog_order() {
        for (i, palette) in SeasonalPalette::ALL.iter().enumerate() {
            assert_eq!(palette.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_catalog_names() {
        let json = serde_json::to_string(&SeasonalPalette::DarkAutumn).unwrap();
        assert_eq!(json, "\"Dark Autumn\"");
        let back: SeasonalPalette = serde_json::from_str("\"Cool Summer\"").unwrap();
        assert_eq!(back, SeasonalPalette::CoolSummer);
    }
}
