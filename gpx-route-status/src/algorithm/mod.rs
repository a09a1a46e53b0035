pub mod closed_section;
pub mod geo_ops;
mod road_filter;
mod road_numbers;
mod route_context;

pub use road_filter::{normalize_nfkc, split_affected, FilteredRoads, RoadTrafficFilter};
pub use road_numbers::resolve_road_numbers;
pub use route_context::{resolve_route_context, RouteContext};
