//! The coarse list kind a marker style belongs to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownListType;

/// Coarse list category: ordered (`numbered`) or unordered (`bulleted`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Ordered list (`<ol>`).
    Numbered,
    /// Unordered list (`<ul>`).
    Bulleted,
}

impl ListType {
    /// Both kinds, in the order custom registrations are searched and listed.
    pub const ALL: [ListType; 2] = [ListType::Bulleted, ListType::Numbered];

    /// Returns the lowercase name used by editors (`"numbered"` / `"bulleted"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ListType::Numbered => "numbered",
            ListType::Bulleted => "bulleted",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListType {
    type Err = UnknownListType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numbered" => Ok(ListType::Numbered),
            "bulleted" => Ok(ListType::Bulleted),
            other => Err(UnknownListType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!("numbered".parse::<ListType>(), Ok(ListType::Numbered));
        assert_eq!("bulleted".parse::<ListType>(), Ok(ListType::Bulleted));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "todo".parse::<ListType>().unwrap_err();
        assert_eq!(err, UnknownListType("todo".to_string()));
        assert_eq!(err.to_string(), "Unknown list type: \"todo\"");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Numbered".parse::<ListType>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ListType::Bulleted).unwrap();
        assert_eq!(json, "\"bulleted\"");
        let parsed: ListType = serde_json::from_str("\"numbered\"").unwrap();
        assert_eq!(parsed, ListType::Numbered);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ListType::Numbered.to_string(), "numbered");
        assert_eq!(ListType::Bulleted.to_string(), ListType::Bulleted.as_str());
    }
}
