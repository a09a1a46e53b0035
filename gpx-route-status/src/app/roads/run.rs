use crate::{
    algorithm::RouteContext,
    app::RouteStatusServices,
    config::RouteStatusConfiguration,
    model::{gpx::Route, overpass::RoadNumber, RouteStatusError},
    pipeline::RouteStatusPipeline,
};
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

/// roads along a route, printed by the `roads` command.
#[derive(Debug, Serialize)]
pub struct RoadsSummary {
    #[serde(flatten)]
    pub context: RouteContext,
    pub road_numbers: BTreeMap<String, RoadNumber>,
}

/// resolves the roads of a GPX file and prints them as JSON.
pub fn run_roads(
    gpx_file: &Path,
    interval: Option<usize>,
    configuration_file: Option<&str>,
) -> Result<(), RouteStatusError> {
    let mut conf = RouteStatusConfiguration::load(configuration_file)?;
    if let Some(i) = interval {
        conf.gpx_points_interval = i;
    }
    let services = RouteStatusServices::new(&conf)?;
    let pipeline = RouteStatusPipeline::new(
        &services.geocoder,
        &services.overpass,
        &services.jartic,
        &conf,
    )?;
    let route = Route::from_gpx_file(gpx_file)?;
    let (context, road_numbers) = pipeline.resolve_roads(&route)?;
    let summary = RoadsSummary {
        context,
        road_numbers,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
