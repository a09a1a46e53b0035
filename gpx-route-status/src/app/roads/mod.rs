mod run;

pub use run::{run_roads, RoadsSummary};
