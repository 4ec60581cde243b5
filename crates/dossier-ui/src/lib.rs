//! Dinner Dossier UI Components
//!
//! Presentational primitives shared by the invitation page: the loading
//! screen, the theme switch, the not-found and error views, and the bits of
//! chrome every section reuses.
//!
//! ## Design Language
//!
//! Classified-file aesthetic:
//! - **Signal red (#e63946)**: stamps, warnings, clearance badges
//! - **Terminal green (#39ff14)**: status dots, "ACCESS GRANTED"
//! - **Brass (#c9a227)**: titles and section rules
//! - **Ink (#0b0d10)**: background in the dark theme
//!
//! Components only emit class names; the stylesheet lives in the binary.

pub mod components;

pub use components::*;
