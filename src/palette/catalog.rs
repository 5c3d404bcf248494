//! The builtin palette catalog.
//!
//! Twelve curated seasonal palettes, each with three color lists:
//! `primary` (colors that exemplify the archetype), `secondary`
//! (acceptable colors), and `avoid` (colors that clash). The lists are
//! reference data: constructed once, never mutated, shared by every
//! scoring call. The catalog is passed into the scorer explicitly rather
//! than living behind a module-level singleton, which keeps the engine
//! testable and free of hidden state.

use crate::color::Rgb;
use crate::error::EngineError;
use crate::palette::SeasonalPalette;

/// The three curated color lists defining one seasonal palette.
///
/// The lists are disjoint by curation, not by construction: nothing
/// enforces that a color appears in only one list, and the same color may
/// legitimately appear in several *palettes* (saddle brown is both a Dark
/// Autumn and a Warm Autumn primary).
#[derive(Debug, Clone)]
pub struct PaletteDefinition {
    /// Colors that exemplify the archetype (8–10 entries).
    pub primary: Vec<Rgb>,
    /// Acceptable supporting colors (6–8 entries).
    pub secondary: Vec<Rgb>,
    /// Colors that clash with the archetype (5 entries).
    pub avoid: Vec<Rgb>,
}

/// Seed data for one palette: packed `0xRRGGBB` literals.
struct Seed {
    primary: &'static [u32],
    secondary: &'static [u32],
    avoid: &'static [u32],
}

/// Catalog seed tables, in [`SeasonalPalette::ALL`] order.
///
/// Curated by hand against the twelve-season color analysis archetypes.
/// Tuning a list only affects scoring, never the schema; adding or
/// removing a *palette* is a breaking change (see [`SeasonalPalette`]).
const SEEDS: [Seed; 12] = [
    // Dark Autumn: deep, warm, earthy
    Seed {
        primary: &[
            0x8B4513, 0x654321, 0x800020, 0x556B2F, 0x8B0000, 0xA0522D, 0x7B3F00, 0x4B3621,
            0x5C4033,
        ],
        secondary: &[
            0xDAA520, 0xB8860B, 0xCD853F, 0x8F9779, 0xC04000, 0x954535, 0x704214,
        ],
        avoid: &[0xE0FFFF, 0xFFB6C1, 0xCCCCFF, 0xF0F8FF, 0xC0C0C0],
    },
    // Dark Winter: deep, cool, high contrast
    Seed {
        primary: &[
            0x000000, 0x191970, 0x4B0082, 0x013220, 0x560319, 0x0F52BA, 0x3C1361, 0x1B1B3A,
            0x8B0000,
        ],
        secondary: &[
            0xFFFFFF, 0xDC143C, 0xC71585, 0x008080, 0x4169E1, 0x50404D, 0x663399,
        ],
        avoid: &[0xC3B091, 0xD2B48C, 0xE2725B, 0xBDB76B, 0xCC7722],
    },
    // Light Spring: warm, delicate pastels
    Seed {
        primary: &[
            0xFFFACD, 0xFFDAB9, 0x98FB98, 0x87CEFA, 0xFFB6C1, 0xF0E68C, 0xFFE4B5, 0xAFEEEE,
        ],
        secondary: &[
            0xFF7F50, 0xFFD700, 0x40E0D0, 0xF08080, 0x9ACD32, 0xFFA07A, 0x00CED1,
        ],
        avoid: &[0x000000, 0x4B0082, 0x800020, 0x2F4F4F, 0x36454F],
    },
    // Light Summer: cool, airy pastels
    Seed {
        primary: &[
            0xB0E0E6, 0xE6E6FA, 0xD8BFD8, 0xADD8E6, 0xF0FFF0, 0xE0FFFF, 0xB6D0E2, 0xDCD0FF,
            0x93CCEA,
        ],
        secondary: &[
            0x87CEEB, 0xC8A2C8, 0xBC8F8F, 0x9FE2BF, 0x778899, 0xDB7093, 0x66CDAA,
        ],
        avoid: &[0xFF4500, 0x8B4513, 0xFFA500, 0x556B2F, 0x000000],
    },
    // Muted Autumn: soft, warm, greyed earth tones
    Seed {
        primary: &[
            0x8F9779, 0xC3B091, 0xBDB76B, 0xD2B48C, 0xA67B5B, 0x918151, 0x808000, 0xCC9966,
            0x996515,
        ],
        secondary: &[
            0xE2725B, 0xCD853F, 0xB87333, 0x9DC183, 0xC19A6B, 0x8A795D, 0xDAA06D,
        ],
        avoid: &[0xFF00FF, 0x00FFFF, 0x0000FF, 0xFF1493, 0x000000],
    },
    // Muted Summer: soft, cool, greyed blues and mauves
    Seed {
        primary: &[
            0x708090, 0x778899, 0xB0C4DE, 0xA9A9A9, 0x8C92AC, 0xC4AEAD, 0x91A3B0, 0x6D7B8D,
            0xAFA8BA,
        ],
        secondary: &[
            0x4682B4, 0x9370DB, 0xBC8F8F, 0x5D8AA8, 0xC3B1E1, 0x807D9B, 0x6E7F80,
        ],
        avoid: &[0xFF8C00, 0xFFFF00, 0xFF4500, 0x8B4513, 0x32CD32],
    },
    // Bright Winter: clear, cool, saturated
    Seed {
        primary: &[
            0x0000FF, 0xFF0000, 0xFF00FF, 0x000000, 0xFFFFFF, 0x00FFFF, 0x4169E1, 0xDC143C,
            0x8A2BE2,
        ],
        secondary: &[
            0x00FF7F, 0xFF1493, 0x7DF9FF, 0x9400D3, 0x00BFFF, 0xE0115F, 0x39FF14,
        ],
        avoid: &[0xD2B48C, 0xBDB76B, 0xC3B091, 0xA67B5B, 0x8F9779],
    },
    // Bright Spring: clear, warm, saturated
    Seed {
        primary: &[
            0xFF4500, 0xFFD700, 0x00FA9A, 0xFF6347, 0x32CD32, 0xFF69B4, 0x00BFFF, 0xFFA500,
            0x7FFF00,
        ],
        secondary: &[
            0xFF7F50, 0x40E0D0, 0xFFFF00, 0xADFF2F, 0xFF8C00, 0x1E90FF, 0xF08080, 0x00FF00,
        ],
        avoid: &[0x708090, 0xA9A9A9, 0x4B3621, 0x36454F, 0x696969],
    },
    // Warm Autumn: golden, rich earth tones
    Seed {
        primary: &[
            0xB7410E, 0xCC5500, 0xD2691E, 0xDAA520, 0x808000, 0xB8860B, 0xA0522D, 0xC04000,
            0x8B4513,
        ],
        secondary: &[
            0xE2725B, 0xC19A6B, 0xCD853F, 0xBDB76B, 0x954535, 0xB87333, 0x996633,
        ],
        avoid: &[0xFF00FF, 0x00FFFF, 0xC0C0C0, 0xE6E6FA, 0x000080],
    },
    // Warm Spring: golden, fresh, sunlit
    Seed {
        primary: &[
            0xFFA500, 0xFFD700, 0xFF7F50, 0xADFF2F, 0xFFDAB9, 0xF4A460, 0xFFE135, 0xFF8C69,
            0xE9D66B,
        ],
        secondary: &[
            0x40E0D0, 0x9ACD32, 0xFF6347, 0xF0E68C, 0xFFB347, 0x98FB98, 0xFFCC33,
        ],
        avoid: &[0x000000, 0x708090, 0x4B0082, 0x36454F, 0x800020],
    },
    // Cool Winter: icy, blue-based, high contrast
    Seed {
        primary: &[
            0x0000CD, 0xFFFFFF, 0x000000, 0xDC143C, 0x4B0082, 0x0F52BA, 0x9400D3, 0xC71585,
            0x191970,
        ],
        secondary: &[
            0xE0FFFF, 0xCCCCFF, 0xFF00FF, 0x008080, 0x4682B4, 0xB57EDC, 0xF8F8FF,
        ],
        avoid: &[0xFFA500, 0xDAA520, 0xCC5500, 0xD2B48C, 0x808000],
    },
    // Cool Summer: blue-based, medium-soft
    Seed {
        primary: &[
            0x4682B4, 0x5F9EA0, 0x6495ED, 0x708090, 0x9370DB, 0xDB7093, 0x87CEEB, 0x778899,
            0x8FBC8F,
        ],
        secondary: &[
            0xB0C4DE, 0xD8BFD8, 0xC8A2C8, 0x66CDAA, 0xA9A9A9, 0xE6E6FA, 0xBC8F8F,
        ],
        avoid: &[0xFF4500, 0xFFA500, 0xB7410E, 0x8B4513, 0xFFD700],
    },
];

/// The read-only table of all twelve palette definitions.
///
/// Construct once with [`PaletteCatalog::standard()`] and share it
/// (typically behind an `Arc`) across all scoring calls. Concurrent
/// unsynchronized reads are safe; no mutation path exists.
///
/// # Example
///
/// ```
/// use chromafit::{PaletteCatalog, SeasonalPalette};
///
/// let catalog = PaletteCatalog::standard();
/// let dark_autumn = catalog.get(SeasonalPalette::DarkAutumn);
/// assert!(dark_autumn.primary.contains(&"#8B4513".parse().unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteCatalog {
    definitions: Vec<PaletteDefinition>,
}

impl PaletteCatalog {
    /// Build the standard twelve-palette catalog from the builtin tables.
    ///
    /// Infallible: the seed data is `u32` literals, so there is no parse
    /// step that could fail at construction time.
    pub fn standard() -> Self {
        let definitions = SEEDS
            .iter()
            .map(|seed| PaletteDefinition {
                primary: seed.primary.iter().map(|&c| Rgb::from_u24(c)).collect(),
                secondary: seed.secondary.iter().map(|&c| Rgb::from_u24(c)).collect(),
                avoid: seed.avoid.iter().map(|&c| Rgb::from_u24(c)).collect(),
            })
            .collect();
        Self { definitions }
    }

    /// Get the definition for a palette. Infallible: the enum is the
    /// vocabulary.
    #[inline]
    pub fn get(&self, palette: SeasonalPalette) -> &PaletteDefinition {
        &self.definitions[palette.index()]
    }

    /// Resolve a persisted palette label to its definition.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownPalette`] if the name is not one of the
    /// twelve catalog names — a caller/schema mismatch, and the only hard
    /// failure in this engine.
    pub fn lookup(&self, name: &str) -> Result<&PaletteDefinition, EngineError> {
        let palette: SeasonalPalette = name.parse()?;
        Ok(self.get(palette))
    }

    /// Iterate all palettes with their definitions, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (SeasonalPalette, &PaletteDefinition)> {
        SeasonalPalette::ALL
            .into_iter()
            .map(move |p| (p, self.get(p)))
    }
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
