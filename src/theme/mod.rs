//! Visual theme for Dinner Dossier.

mod styles;

pub use styles::GLOBAL_STYLES;
