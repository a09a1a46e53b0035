use serde::{Deserialize, Serialize};

/// shared http client settings.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct HttpConfiguration {
    /// total request timeout
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// user agent sent to the OpenStreetMap services
    pub user_agent: String,
}

impl Default for HttpConfiguration {
    fn default() -> Self {
        Self {
            timeout_secs: 180,
            connect_timeout_secs: 30,
            user_agent: String::from(concat!(
                "gpx-route-status/",
                env!("CARGO_PKG_VERSION")
            )),
        }
    }
}

/// Nominatim reverse geocoding.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct GeocodingConfiguration {
    pub base_url: String,
    /// additional attempts after a transport failure
    pub retries: usize,
    /// lifetime of cached reverse geocoding responses
    pub cache_ttl_secs: u64,
}

impl Default for GeocodingConfiguration {
    fn default() -> Self {
        Self {
            base_url: String::from("https://nominatim.openstreetmap.org"),
            retries: 3,
            cache_ttl_secs: 24 * 60 * 60,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct OverpassConfiguration {
    pub interpreter_url: String,
}

impl Default for OverpassConfiguration {
    fn default() -> Self {
        Self {
            interpreter_url: String::from("https://overpass-api.de/api/interpreter"),
        }
    }
}

/// JARTIC traffic information.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct TrafficConfiguration {
    pub base_url: String,
    /// JARTIC rejects requests without a browser user agent
    pub user_agent: String,
    /// abort the run when a prefecture cannot be fetched, instead of
    /// continuing without its traffic data
    pub fail_on_error: bool,
}

impl Default for TrafficConfiguration {
    fn default() -> Self {
        Self {
            base_url: String::from("https://www.jartic.or.jp"),
            user_agent: String::from(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            ),
            fail_on_error: false,
        }
    }
}
