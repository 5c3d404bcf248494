//! The seasonal palette vocabulary and catalog.

mod catalog;
mod season;

pub use catalog::{PaletteCatalog, PaletteDefinition};
pub use season::SeasonalPalette;
