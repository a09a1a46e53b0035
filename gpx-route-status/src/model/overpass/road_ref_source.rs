use crate::model::service::ServiceError;

/// looks up the OSM `ref` tags of the ways carrying a given road name.
pub trait RoadRefSource {
    fn way_refs(&self, road_name: &str) -> Result<Vec<String>, ServiceError>;
}
