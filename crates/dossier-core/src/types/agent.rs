//! Agent Record - one operative on the roster.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// The roster document: `{"agents": [...]}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Roster {
    pub agents: Vec<AgentRecord>,
}

/// A single agent profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    /// Unique across the roster; also the render key
    pub id: String,
    pub name: String,
    pub codename: String,
    pub classification: String,
    pub clearance_level: String,
    pub status: String,
    /// File name under the agent image directory
    pub image: String,
    #[serde(default)]
    pub stats: StatSheet,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub motto: String,
}

impl AgentRecord {
    /// Resolve the image reference against an image directory.
    pub fn image_src(&self, image_dir: &str) -> String {
        let dir = image_dir.trim_end_matches('/');
        if dir.is_empty() {
            self.image.clone()
        } else {
            format!("{}/{}", dir, self.image)
        }
    }
}

/// Named stat rendered as a percentage bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

impl Stat {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Upper-cased label shown above the bar
    pub fn label(&self) -> String {
        self.name.to_uppercase()
    }

    /// Inline style for the bar fill. The value is used as-is.
    pub fn fill_style(&self) -> String {
        format!("width: {}%;", self.value)
    }
}

/// Stats in document order.
///
/// Deserializes from a JSON object but keeps the key order of the source,
/// which a `HashMap` would lose.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatSheet(Vec<Stat>);

impl StatSheet {
    pub fn new(stats: Vec<Stat>) -> Self {
        Self(stats)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stat> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.iter().find(|s| s.name == name).map(|s| s.value)
    }
}

impl<'a> IntoIterator for &'a StatSheet {
    type Item = &'a Stat;
    type IntoIter = std::slice::Iter<'a, Stat>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for StatSheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatSheetVisitor;

        impl<'de> Visitor<'de> for StatSheetVisitor {
            type Value = StatSheet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of stat names to integer values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StatSheet, A::Error> {
                let mut stats = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, u32>()? {
                    stats.push(Stat { name, value });
                }
                Ok(StatSheet(stats))
            }
        }

        deserializer.deserialize_map(StatSheetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_keep_document_order() {
        let sheet: StatSheet =
            serde_json::from_str(r#"{"stealth": 80, "charm": 40, "appetite": 100}"#).unwrap();
        let names: Vec<&str> = sheet.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["stealth", "charm", "appetite"]);

        let reordered: StatSheet =
            serde_json::from_str(r#"{"appetite": 100, "stealth": 80, "charm": 40}"#).unwrap();
        let names: Vec<&str> = reordered.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["appetite", "stealth", "charm"]);
    }

    #[test]
    fn stat_fill_uses_value_as_percentage() {
        assert_eq!(Stat::new("A", 80).fill_style(), "width: 80%;");
        assert_eq!(Stat::new("B", 40).fill_style(), "width: 40%;");
        assert_eq!(Stat::new("zero", 0).fill_style(), "width: 0%;");
    }

    #[test]
    fn stat_label_is_upper_case() {
        assert_eq!(Stat::new("wine knowledge", 70).label(), "WINE KNOWLEDGE");
    }

    #[test]
    fn negative_stat_is_rejected() {
        let result = serde_json::from_str::<StatSheet>(r#"{"stealth": -5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_stats_and_specialties_default_to_empty() {
        let agent: AgentRecord = serde_json::from_str(
            r#"{
                "id": "001",
                "name": "Ada",
                "codename": "Cipher",
                "classification": "Analyst",
                "clearanceLevel": "TOP SECRET",
                "status": "ACTIVE",
                "image": "ada.jpg",
                "motto": "Trust, but decrypt."
            }"#,
        )
        .unwrap();
        assert!(agent.stats.is_empty());
        assert!(agent.specialties.is_empty());
    }

    #[test]
    fn image_src_joins_directory() {
        let agent = AgentRecord {
            id: "1".into(),
            name: "n".into(),
            codename: "c".into(),
            classification: "x".into(),
            clearance_level: "y".into(),
            status: "z".into(),
            image: "face.png".into(),
            stats: StatSheet::default(),
            specialties: vec![],
            motto: "m".into(),
        };
        assert_eq!(agent.image_src("assets/agents"), "assets/agents/face.png");
        assert_eq!(agent.image_src("assets/agents/"), "assets/agents/face.png");
        assert_eq!(agent.image_src(""), "face.png");
    }
}
