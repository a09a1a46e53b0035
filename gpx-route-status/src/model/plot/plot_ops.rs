use super::{MapLayout, MapTrace, RouteFigure, TraceKind};
use crate::{
    algorithm::closed_section, config::PlotConfiguration, model::gpx::Route,
    model::traffic::AffectedRoad,
};

/// draws the route with its restricted roads and closed sections.
///
/// restricted roads that are not closed are drawn from their own geometry.
/// closed roads are drawn along the route between the endpoints of the
/// closure, and skipped when either endpoint is off the route.
pub fn plot_route_with_restrictions(
    route: &Route,
    affected: &[AffectedRoad],
    conf: &PlotConfiguration,
) -> RouteFigure {
    let mut data = vec![MapTrace::new(TraceKind::Route, route.points())];

    for road in affected.iter().filter(|a| !a.is_closed()) {
        if let Some(geometry) = &road.record.geometry {
            data.push(MapTrace::new(TraceKind::RestrictedRoad, &geometry.0));
        }
    }

    for road in affected.iter().filter(|a| a.is_closed()) {
        let section = road.record.endpoints().and_then(|(start, end)| {
            closed_section::locate_section(
                route.points(),
                start,
                end,
                conf.closed_section_tolerance_meters,
            )
        });
        match section {
            Some(points) => data.push(MapTrace::new(TraceKind::ClosedRoad, &points)),
            None => log::debug!(
                "closed section of {} is not on the route, not drawn",
                road.road_number
            ),
        }
    }

    RouteFigure {
        data,
        layout: MapLayout::new(route.center(), conf),
    }
}
