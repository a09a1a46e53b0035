use super::{Address, ResponseCache, ReverseGeocoder};
use crate::model::service::ServiceError;
use geo::Coord;
use std::{sync::Mutex, time::Duration};

/// wraps a geocoder with a response cache keyed by `"{lat},{lon}"`.
/// empty addresses are not cached so that they are retried on the next lookup.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: Mutex<ResponseCache<String, Address>>,
}

impl<G: ReverseGeocoder> CachedGeocoder<G> {
    pub fn new(inner: G, ttl: Duration) -> CachedGeocoder<G> {
        CachedGeocoder {
            inner,
            cache: Mutex::new(ResponseCache::new(ttl)),
        }
    }

    pub fn cache_key(coord: &Coord<f64>) -> String {
        format!("{},{}", coord.y, coord.x)
    }

    fn lookup(&self, key: &String) -> Option<Address> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.get(key)
    }

    fn store(&self, key: String, address: Address) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.insert(key, address);
    }
}

impl<G: ReverseGeocoder> ReverseGeocoder for CachedGeocoder<G> {
    fn reverse(&self, coord: &Coord<f64>) -> Result<Address, ServiceError> {
        let key = Self::cache_key(coord);
        if let Some(address) = self.lookup(&key) {
            log::debug!("address cache hit for {key}");
            return Ok(address);
        }
        let address = self.inner.reverse(coord)?;
        if !address.is_empty() {
            self.store(key, address.clone());
        }
        Ok(address)
    }
}
