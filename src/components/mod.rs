//! Page sections for the invitation.

mod agent_card;
mod briefing;
mod criteria;
mod footer;
mod hero;
mod mission_details;

pub use agent_card::AgentCard;
pub use briefing::BriefingGrid;
pub use criteria::CriteriaGrid;
pub use footer::Footer;
pub use hero::Hero;
pub use mission_details::MissionDetails;
