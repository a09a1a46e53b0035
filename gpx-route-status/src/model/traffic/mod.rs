mod affected_road;
mod jartic_client;
pub mod jartic_ops;
mod restriction_status;
mod traffic_record;
mod traffic_source;

pub use affected_road::AffectedRoad;
pub use jartic_client::JarticClient;
pub use restriction_status::RestrictionStatus;
pub use traffic_record::TrafficRecord;
pub use traffic_source::TrafficSource;
