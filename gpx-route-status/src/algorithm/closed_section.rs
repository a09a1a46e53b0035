//! matching of closed stretches against the route geometry.
use super::geo_ops::within_meters;
use geo::Coord;

/// walks the route collecting the points of a closed stretch given by its
/// two endpoints.
///
/// the first route point within `tolerance_meters` of either endpoint starts
/// the section and the other endpoint becomes the target; when the first
/// point is near the end, the start endpoint is the target. points are
/// collected up to and including the first one within tolerance of the
/// target. returns `None` unless both ends were found on the route.
pub fn locate_section(
    route: &[Coord<f64>],
    start: Coord<f64>,
    end: Coord<f64>,
    tolerance_meters: f64,
) -> Option<Vec<Coord<f64>>> {
    let mut target = end;
    let mut started = false;
    let mut section = vec![];
    for point in route.iter() {
        if !started {
            if within_meters(start, *point, tolerance_meters) {
                started = true;
            }
            if within_meters(end, *point, tolerance_meters) {
                started = true;
                target = start;
            }
        }
        if started {
            section.push(*point);
            if within_meters(target, *point, tolerance_meters) {
                return Some(section);
            }
        }
    }
    None
}
