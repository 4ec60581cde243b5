//! Content loader.
//!
//! Reads the page and roster documents once at startup and validates them.
//! There is no partial result: either both documents load and pass
//! validation, or the caller gets an error naming the broken document.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{DossierError, DossierResult};
use crate::types::{AgentRecord, PageContent, Roster};

/// Page document shipped with the binary
pub const EMBEDDED_PAGE: &str = include_str!("../content/page.json");

/// Roster document shipped with the binary
pub const EMBEDDED_ROSTER: &str = include_str!("../content/agents.json");

/// File names looked up by [`Content::from_dir`]
pub const PAGE_FILE: &str = "page.json";
pub const ROSTER_FILE: &str = "agents.json";

/// Both documents, immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub page: PageContent,
    pub roster: Vec<AgentRecord>,
}

impl Content {
    /// Parse the documents compiled into the binary.
    pub fn embedded() -> DossierResult<Self> {
        let content = Self::from_json(EMBEDDED_PAGE, EMBEDDED_ROSTER)?;
        tracing::info!(agents = content.roster.len(), "Loaded embedded content");
        Ok(content)
    }

    /// Read `page.json` and `agents.json` from a directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> DossierResult<Self> {
        let dir = dir.as_ref();
        let page = read_document(&dir.join(PAGE_FILE))?;
        let roster = read_document(&dir.join(ROSTER_FILE))?;
        let content = Self::from_json(&page, &roster)?;
        tracing::info!(
            dir = %dir.display(),
            agents = content.roster.len(),
            "Loaded content from directory"
        );
        Ok(content)
    }

    /// Parse and validate both documents from strings.
    pub fn from_json(page: &str, roster: &str) -> DossierResult<Self> {
        let page: PageContent = serde_json::from_str(page).map_err(|source| {
            DossierError::Parse {
                document: "page",
                source,
            }
        })?;
        let Roster { agents } = serde_json::from_str(roster).map_err(|source| {
            DossierError::Parse {
                document: "roster",
                source,
            }
        })?;

        let content = Self {
            page,
            roster: agents,
        };
        content.validate()?;
        Ok(content)
    }

    /// Check roster invariants: unique ids and stats within 0..=100.
    pub fn validate(&self) -> DossierResult<()> {
        let mut seen = HashSet::with_capacity(self.roster.len());
        for agent in &self.roster {
            if !seen.insert(agent.id.as_str()) {
                return Err(DossierError::DuplicateAgentId(agent.id.clone()));
            }
            if let Some(stat) = agent.stats.iter().find(|s| s.value > 100) {
                return Err(DossierError::StatOutOfRange {
                    agent: agent.id.clone(),
                    stat: stat.name.clone(),
                    value: stat.value,
                });
            }
        }
        Ok(())
    }
}

fn read_document(path: &Path) -> DossierResult<String> {
    std::fs::read_to_string(path).map_err(|source| DossierError::Io {
        path: path.to_path_buf(),
        source,
    })
}
