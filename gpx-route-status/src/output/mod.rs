mod csv_export;
pub mod dashboard;
mod output_ops;

pub use csv_export::{write_affected_roads_csv, AffectedRoadRow};
pub use output_ops::{write_outputs, OutputFiles};
