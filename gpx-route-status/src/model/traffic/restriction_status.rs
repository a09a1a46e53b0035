use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// status of a traffic record, read from its restriction description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "description", rename_all = "snake_case")]
pub enum RestrictionStatus {
    Open,
    Restricted(String),
    Closed,
}

impl RestrictionStatus {
    /// JARTIC restriction description for a full closure.
    pub const CLOSED_DESCRIPTION: &'static str = "通行止";

    pub fn from_description(description: Option<&str>) -> RestrictionStatus {
        match description.map(str::trim) {
            None | Some("") => RestrictionStatus::Open,
            Some(Self::CLOSED_DESCRIPTION) => RestrictionStatus::Closed,
            Some(other) => RestrictionStatus::Restricted(String::from(other)),
        }
    }

    pub fn is_affected(&self) -> bool {
        !matches!(self, RestrictionStatus::Open)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, RestrictionStatus::Closed)
    }
}

impl Display for RestrictionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestrictionStatus::Open => write!(f, "open"),
            RestrictionStatus::Restricted(d) => write!(f, "{d}"),
            RestrictionStatus::Closed => write!(f, "{}", Self::CLOSED_DESCRIPTION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RestrictionStatus;

    #[test]
    fn test_from_description() {
        assert_eq!(RestrictionStatus::from_description(None), RestrictionStatus::Open);
        assert_eq!(RestrictionStatus::from_description(Some(" ")), RestrictionStatus::Open);
        assert_eq!(
            RestrictionStatus::from_description(Some("通行止")),
            RestrictionStatus::Closed
        );
        assert_eq!(
            RestrictionStatus::from_description(Some("片側交互通行")),
            RestrictionStatus::Restricted(String::from("片側交互通行"))
        );
    }

    #[test]
    fn test_closed_is_affected() {
        assert!(RestrictionStatus::Closed.is_affected());
        assert!(RestrictionStatus::Restricted(String::from("車線規制")).is_affected());
        assert!(!RestrictionStatus::Open.is_affected());
        assert!(!RestrictionStatus::Restricted(String::from("車線規制")).is_closed());
    }
}
