//! Page Content - everything on the page that is not an agent card.

use serde::Deserialize;

use crate::briefing::BriefingKind;

/// The page document: hero text, current mission and the briefing sections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// Short code shown in the hero badge
    pub mission_code: String,
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub current_mission: CurrentMission,
    pub sections: Sections,
}

/// Details of the upcoming dinner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMission {
    /// Host of this round ("Mission Commander")
    pub host: String,
    pub mission_number: u32,
    pub location: Location,
    pub theme: String,
    pub dress_code: String,
    pub previous_mission: PreviousMission,
    pub menu: Menu,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub venue: String,
    pub address: String,
    pub city: String,
    pub coordinates: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreviousMission {
    pub host: String,
    pub theme: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Menu {
    pub title: String,
    pub items: Vec<MenuItem>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub course: String,
    pub dish: String,
}

/// The four briefing sections plus the rating criteria.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub how_it_works: Section,
    pub dates_and_times: Section,
    pub important_bits: Section,
    pub unwritten_rules: Section,
    pub rating_criteria: RatingCriteria,
}

impl Sections {
    /// Look up the section backing a briefing card.
    pub fn briefing(&self, kind: BriefingKind) -> &Section {
        match kind {
            BriefingKind::HowItWorks => &self.how_it_works,
            BriefingKind::DatesAndTimes => &self.dates_and_times,
            BriefingKind::ImportantBits => &self.important_bits,
            BriefingKind::UnwrittenRules => &self.unwritten_rules,
        }
    }

    /// Briefing sections in display order, independent of document order.
    pub fn briefings(&self) -> impl Iterator<Item = (BriefingKind, &Section)> + '_ {
        BriefingKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.briefing(kind)))
    }
}

/// A titled, ordered list of bullet points
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub title: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingCriteria {
    pub criteria: Vec<Criterion>,
}

/// One entry of the assessment grid
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Criterion {
    /// Emoji shown above the name
    pub icon: String,
    pub name: String,
    pub description: String,
}
