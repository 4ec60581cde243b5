//! The four fixed briefing cards.

/// Identifies one briefing card. Display order is [`BriefingKind::ALL`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BriefingKind {
    HowItWorks,
    DatesAndTimes,
    ImportantBits,
    UnwrittenRules,
}

impl BriefingKind {
    pub const ALL: [BriefingKind; 4] = [
        BriefingKind::HowItWorks,
        BriefingKind::DatesAndTimes,
        BriefingKind::ImportantBits,
        BriefingKind::UnwrittenRules,
    ];

    /// Icon shown in the card header
    pub fn icon(&self) -> &'static str {
        match self {
            BriefingKind::HowItWorks => "🎯",
            BriefingKind::DatesAndTimes => "📅",
            BriefingKind::ImportantBits => "⚠️",
            BriefingKind::UnwrittenRules => "🔒",
        }
    }

    /// Stable key, matches the document field name
    pub fn key(&self) -> &'static str {
        match self {
            BriefingKind::HowItWorks => "howItWorks",
            BriefingKind::DatesAndTimes => "datesAndTimes",
            BriefingKind::ImportantBits => "importantBits",
            BriefingKind::UnwrittenRules => "unwrittenRules",
        }
    }
}
