mod address;
mod cached_geocoder;
mod nominatim_client;
mod prefecture_code;
mod response_cache;
mod reverse_geocoder;

pub use address::Address;
pub use cached_geocoder::CachedGeocoder;
pub use nominatim_client::NominatimClient;
pub use prefecture_code::PrefectureCode;
pub use response_cache::ResponseCache;
pub use reverse_geocoder::ReverseGeocoder;
