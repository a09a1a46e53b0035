use super::{Address, ReverseGeocoder};
use crate::{
    config::GeocodingConfiguration,
    model::service::{http_ops, ServiceError},
};
use geo::Coord;
use reqwest::blocking::Client;
use serde::Deserialize;

/// reverse geocoding against a Nominatim server.
/// see <https://nominatim.org/release-docs/latest/api/Reverse/>
pub struct NominatimClient {
    client: Client,
    reverse_url: String,
    retries: usize,
}

#[derive(Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Address,
    #[serde(default)]
    error: Option<String>,
}

impl NominatimClient {
    const SERVICE: &'static str = "Nominatim";
    /// street-level detail
    const ZOOM: u8 = 18;

    pub fn new(client: Client, conf: &GeocodingConfiguration) -> NominatimClient {
        NominatimClient {
            client,
            reverse_url: format!("{}/reverse", conf.base_url.trim_end_matches('/')),
            retries: conf.retries,
        }
    }

    fn fetch(&self, coord: &Coord<f64>) -> Result<String, ServiceError> {
        let query = [
            ("format", String::from("json")),
            ("lat", coord.y.to_string()),
            ("lon", coord.x.to_string()),
            ("zoom", Self::ZOOM.to_string()),
            ("addressdetails", String::from("1")),
        ];
        http_ops::get_text(&self.client, Self::SERVICE, &self.reverse_url, &query, None)
    }
}

impl ReverseGeocoder for NominatimClient {
    fn reverse(&self, coord: &Coord<f64>) -> Result<Address, ServiceError> {
        let mut attempt = 0;
        loop {
            match self.fetch(coord) {
                Ok(body) => return parse_reverse_response(&body),
                Err(e) if e.is_transport() && attempt < self.retries => {
                    attempt += 1;
                    log::warn!("{e}, retrying ({attempt}/{})", self.retries);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// reads the `address` object of a reverse geocoding response. a response
/// without an address (e.g. `{"error": "Unable to geocode"}`) is an empty address.
pub fn parse_reverse_response(body: &str) -> Result<Address, ServiceError> {
    let response: ReverseResponse = http_ops::decode_json(NominatimClient::SERVICE, body)?;
    if let Some(message) = response.error {
        log::debug!("Nominatim returned no address: {message}");
    }
    Ok(response.address)
}
