//! Core types for Dinner Dossier
//!
//! Both content documents deserialize straight into these types. Field names
//! follow the documents' camelCase keys.

mod agent;
mod page;
mod theme;

pub use agent::{AgentRecord, Roster, Stat, StatSheet};
pub use page::{
    CurrentMission, Criterion, Location, Menu, MenuItem, PageContent, PreviousMission,
    RatingCriteria, Section, Sections,
};
pub use theme::Theme;
