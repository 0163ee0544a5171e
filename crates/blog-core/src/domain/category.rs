use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sport a blog post is filed under.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "NBA")]
    Nba,
    #[serde(rename = "NHL")]
    Nhl,
    #[serde(rename = "NFL")]
    Nfl,
    #[serde(rename = "MLB")]
    Mlb,
    Esports,
    Footy,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Nba,
        Category::Nhl,
        Category::Nfl,
        Category::Mlb,
        Category::Esports,
        Category::Footy,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nba => "NBA",
            Category::Nhl => "NHL",
            Category::Nfl => "NFL",
            Category::Mlb => "MLB",
            Category::Esports => "Esports",
            Category::Footy => "Footy",
            Category::Other => "Other",
        }
    }

    /// Case-insensitive lookup used for category browsing.
    pub fn parse_ignore_case(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a valid category")]
pub struct UnknownCategory(pub String);

/// Exact, case-sensitive match. Writes must use one of the listed spellings.
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!("NBA".parse::<Category>(), Ok(Category::Nba));
        assert_eq!("Esports".parse::<Category>(), Ok(Category::Esports));
        assert!("nba".parse::<Category>().is_err());
        assert!("Cricket".parse::<Category>().is_err());
    }

    #[test]
    fn test_parse_ignore_case() {
        assert_eq!(Category::parse_ignore_case("nba"), Some(Category::Nba));
        assert_eq!(Category::parse_ignore_case("FOOTY"), Some(Category::Footy));
        assert_eq!(Category::parse_ignore_case("cricket"), None);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::Mlb).unwrap();
        assert_eq!(json, "\"MLB\"");
    }
}
