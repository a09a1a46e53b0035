use serde::{Deserialize, Serialize};

/// the subset of a Nominatim `address` object used to place a route point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub road: Option<String>,
    /// ISO 3166-2 code of the first-level subdivision, e.g. `JP-21` for Gifu.
    #[serde(default, rename = "ISO3166-2-lvl4")]
    pub iso3166_2_lvl4: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self == &Address::default()
    }
}
