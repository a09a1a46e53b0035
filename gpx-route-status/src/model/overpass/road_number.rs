use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the identifier JARTIC uses for a road, e.g. `19号`. roads without an OSM
/// `ref` are identified by their name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoadNumber(String);

impl RoadNumber {
    pub const SUFFIX: &'static str = "号";

    /// builds a road number from an OSM `ref` tag. multi-valued refs
    /// (`19;21`) use their first value.
    pub fn from_ref(osm_ref: &str) -> Option<RoadNumber> {
        let first = osm_ref.split(';').map(str::trim).find(|s| !s.is_empty())?;
        if first.ends_with(Self::SUFFIX) {
            Some(RoadNumber(String::from(first)))
        } else {
            Some(RoadNumber(format!("{first}{}", Self::SUFFIX)))
        }
    }

    pub fn from_name(road_name: &str) -> RoadNumber {
        RoadNumber(String::from(road_name))
    }

    /// number for a road given the `ref` tags of the ways sharing its name.
    /// the first usable ref wins, otherwise the name stands in.
    pub fn from_lookup(road_name: &str, refs: &[String]) -> RoadNumber {
        refs.iter()
            .find_map(|r| RoadNumber::from_ref(r))
            .unwrap_or_else(|| RoadNumber::from_name(road_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RoadNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::RoadNumber;

    #[test]
    fn test_from_ref() {
        assert_eq!(RoadNumber::from_ref("19").unwrap().as_str(), "19号");
        assert_eq!(RoadNumber::from_ref("19;21").unwrap().as_str(), "19号");
        assert_eq!(RoadNumber::from_ref("256号").unwrap().as_str(), "256号");
        assert!(RoadNumber::from_ref(" ; ").is_none());
    }

    #[test]
    fn test_from_lookup_falls_back_to_name() {
        let number = RoadNumber::from_lookup("中央通り", &[]);
        assert_eq!(number.as_str(), "中央通り");
        let refs = vec![String::from(""), String::from("41")];
        assert_eq!(RoadNumber::from_lookup("国道41号", &refs).as_str(), "41号");
    }
}
