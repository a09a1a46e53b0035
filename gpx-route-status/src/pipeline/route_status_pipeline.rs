use super::RouteStatusReport;
use crate::{
    algorithm::{self, RouteContext, RoadTrafficFilter},
    config::RouteStatusConfiguration,
    model::{
        geocode::{PrefectureCode, ReverseGeocoder},
        gpx::Route,
        overpass::{RoadNumber, RoadRefSource},
        plot::plot_ops,
        traffic::{TrafficRecord, TrafficSource},
        RouteStatusError,
    },
};
use itertools::Itertools;
use std::{collections::BTreeMap, path::Path};

/// runs a route through geocoding, road number lookup, traffic fetching,
/// filtering and plotting. each external call completes before the next.
pub struct RouteStatusPipeline<'a> {
    geocoder: &'a dyn ReverseGeocoder,
    road_refs: &'a dyn RoadRefSource,
    traffic: &'a dyn TrafficSource,
    conf: &'a RouteStatusConfiguration,
    filter: RoadTrafficFilter,
}

impl<'a> RouteStatusPipeline<'a> {
    pub fn new(
        geocoder: &'a dyn ReverseGeocoder,
        road_refs: &'a dyn RoadRefSource,
        traffic: &'a dyn TrafficSource,
        conf: &'a RouteStatusConfiguration,
    ) -> Result<RouteStatusPipeline<'a>, RouteStatusError> {
        conf.validate()?;
        let filter = RoadTrafficFilter::new().map_err(RouteStatusError::InternalError)?;
        Ok(RouteStatusPipeline {
            geocoder,
            road_refs,
            traffic,
            conf,
            filter,
        })
    }

    pub fn run_gpx_file<P: AsRef<Path>>(&self, path: P) -> Result<RouteStatusReport, RouteStatusError> {
        let route = Route::from_gpx_file(path)?;
        self.run(route)
    }

    pub fn run_gpx_str(&self, gpx: &str) -> Result<RouteStatusReport, RouteStatusError> {
        let route = Route::from_gpx_str(gpx)?;
        self.run(route)
    }

    pub fn run(&self, route: Route) -> Result<RouteStatusReport, RouteStatusError> {
        let (context, road_numbers) = self.resolve_roads(&route)?;

        log::info!("  (((3))) Getting traffic data from JARTIC");
        let (records, failed_prefectures) = self.fetch_traffic(&context.prefecture_codes)?;

        log::info!("  (((4))) Filtering restricted roads");
        let filtered = self
            .filter
            .filter_road_traffic(road_numbers.values(), &records);
        log::info!(
            "found {} restricted roads, {} closed",
            filtered.affected.len(),
            filtered.closed.len()
        );

        log::info!("  (((5))) Preparing map of route and affected roads");
        let figure = plot_ops::plot_route_with_restrictions(&route, &filtered.affected, &self.conf.plot);

        Ok(RouteStatusReport {
            route,
            context,
            road_numbers,
            affected_roads: filtered.affected,
            closed_roads: filtered.closed,
            failed_prefectures,
            figure,
        })
    }

    /// road names, prefectures and road numbers along the route, without
    /// any traffic lookups.
    pub fn resolve_roads(
        &self,
        route: &Route,
    ) -> Result<(RouteContext, BTreeMap<String, RoadNumber>), RouteStatusError> {
        log::info!("  (((1))) Getting roads information using OpenStreetMap data");
        let context =
            algorithm::resolve_route_context(route, self.conf.gpx_points_interval, self.geocoder)?;
        log::info!("List of roads: [{}]", context.road_names.iter().join(", "));
        log::info!(
            "List of prefectures: [{}]",
            context.prefecture_codes.iter().join(", ")
        );

        log::info!("  (((2))) Getting road numbers using Overpass API");
        let road_numbers = algorithm::resolve_road_numbers(&context.road_names, self.road_refs)?;
        Ok((context, road_numbers))
    }

    /// traffic records of every prefecture, in prefecture order. a failed
    /// prefecture is skipped with a warning unless `traffic.fail_on_error`.
    fn fetch_traffic<'b, I>(
        &self,
        prefecture_codes: I,
    ) -> Result<(Vec<TrafficRecord>, Vec<PrefectureCode>), RouteStatusError>
    where
        I: IntoIterator<Item = &'b PrefectureCode>,
    {
        let mut records = vec![];
        let mut failed = vec![];
        for code in prefecture_codes {
            match self.traffic.traffic_records(code) {
                Ok(mut prefecture_records) => records.append(&mut prefecture_records),
                Err(e) if self.conf.traffic.fail_on_error => return Err(e.into()),
                Err(e) => {
                    log::warn!("no traffic data for prefecture {code}: {e}");
                    failed.push(*code);
                }
            }
        }
        Ok((records, failed))
    }
}
