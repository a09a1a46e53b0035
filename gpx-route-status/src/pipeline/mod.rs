mod route_status_pipeline;
mod route_status_report;

pub use route_status_pipeline::RouteStatusPipeline;
pub use route_status_report::RouteStatusReport;
