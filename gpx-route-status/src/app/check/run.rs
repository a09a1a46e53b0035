use crate::{
    app::RouteStatusServices, config::RouteStatusConfiguration, model::RouteStatusError,
    output, pipeline::RouteStatusPipeline,
};
use std::path::Path;

/// runs the full pipeline on a GPX file and writes the outputs.
///
/// # Arguments
/// * gpx_file - route to check
/// * interval - sampling interval, overriding the configuration
/// * configuration_file - optional .toml or .json configuration
/// * output_directory - where the dashboard, CSV and figure are written
pub fn run_check(
    gpx_file: &Path,
    interval: Option<usize>,
    configuration_file: Option<&str>,
    output_directory: &Path,
) -> Result<(), RouteStatusError> {
    let mut conf = RouteStatusConfiguration::load(configuration_file)?;
    if let Some(i) = interval {
        conf.gpx_points_interval = i;
    }
    log::debug!(
        "run_check with gpx_file={gpx_file:?}, output_directory={output_directory:?}, interval={}",
        conf.gpx_points_interval
    );

    let services = RouteStatusServices::new(&conf)?;
    let pipeline = RouteStatusPipeline::new(
        &services.geocoder,
        &services.overpass,
        &services.jartic,
        &conf,
    )?;
    let report = pipeline.run_gpx_file(gpx_file)?;
    let files = output::write_outputs(&report, output_directory)?;

    if report.has_restrictions() {
        println!(
            "{} restricted roads ({} closed) on the route, see {}",
            report.affected_roads.len(),
            report.closed_roads.len(),
            files.dashboard.display()
        );
    } else {
        println!(
            "no restricted roads on the route, see {}",
            files.dashboard.display()
        );
    }
    Ok(())
}
