use crate::{
    algorithm::RouteContext,
    model::{
        geocode::PrefectureCode, gpx::Route, overpass::RoadNumber, plot::RouteFigure,
        traffic::AffectedRoad,
    },
};
use serde::Serialize;
use std::collections::BTreeMap;

/// everything a route status run found.
#[derive(Debug, Clone, Serialize)]
pub struct RouteStatusReport {
    #[serde(skip)]
    pub route: Route,
    #[serde(flatten)]
    pub context: RouteContext,
    /// road name to road number
    pub road_numbers: BTreeMap<String, RoadNumber>,
    pub affected_roads: Vec<AffectedRoad>,
    pub closed_roads: Vec<AffectedRoad>,
    /// prefectures whose traffic information could not be fetched
    pub failed_prefectures: Vec<PrefectureCode>,
    pub figure: RouteFigure,
}

impl RouteStatusReport {
    pub fn has_restrictions(&self) -> bool {
        !self.affected_roads.is_empty()
    }
}
