//! Dinner Dossier Core Library
//!
//! Content model and view logic for the spy-themed dinner club invitation.
//!
//! ## Overview
//!
//! The page is rendered from two static JSON documents: a page document
//! (hero text, current mission, briefing sections, rating criteria) and a
//! roster of agents. This crate loads and validates them, and holds the
//! small pieces of state the UI animates: the loading gate, per-card
//! flip/visibility and the theme preference.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dossier_core::{Content, Timings};
//!
//! let content = Content::embedded()?;
//! let timings = Timings::default();
//!
//! for (index, agent) in content.roster.iter().enumerate() {
//!     println!("{} appears after {:?}", agent.codename, timings.entrance_delay(index));
//! }
//! ```

pub mod briefing;
pub mod content;
pub mod error;
pub mod preferences;
pub mod timing;
pub mod types;

// Re-exports
pub use briefing::BriefingKind;
pub use content::Content;
pub use error::{DossierError, DossierResult};
pub use preferences::Preferences;
pub use timing::{CardState, LoadPhase, Timings};
pub use types::*;
