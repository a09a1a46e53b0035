mod overpass_client;
mod overpass_query;
mod road_number;
mod road_ref_source;
mod tag_filter;

pub use overpass_client::{parse_way_refs, OverpassClient};
pub use overpass_query::OverpassQuery;
pub use road_number::RoadNumber;
pub use road_ref_source::RoadRefSource;
pub use tag_filter::TagFilter;
