use crate::{
    config::RouteStatusConfiguration,
    model::{
        geocode::{CachedGeocoder, NominatimClient},
        overpass::OverpassClient,
        service::http_ops,
        traffic::JarticClient,
        RouteStatusError,
    },
};
use std::time::Duration;

/// the live Nominatim, Overpass and JARTIC clients, sharing one http client.
pub struct RouteStatusServices {
    pub geocoder: CachedGeocoder<NominatimClient>,
    pub overpass: OverpassClient,
    pub jartic: JarticClient,
}

impl RouteStatusServices {
    pub fn new(conf: &RouteStatusConfiguration) -> Result<RouteStatusServices, RouteStatusError> {
        let client = http_ops::build_client(&conf.http)?;
        let geocoder = CachedGeocoder::new(
            NominatimClient::new(client.clone(), &conf.geocoding),
            Duration::from_secs(conf.geocoding.cache_ttl_secs),
        );
        Ok(RouteStatusServices {
            geocoder,
            overpass: OverpassClient::new(client.clone(), &conf.overpass),
            jartic: JarticClient::new(client, &conf.traffic),
        })
    }
}
