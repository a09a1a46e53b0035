use geo::{Coord, Distance, Geodesic, Point};

/// distance between two lon/lat coordinates in meters on the WGS84
/// ellipsoid.
pub fn geodesic_meters(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Geodesic.distance(Point::from(a), Point::from(b))
}

/// true when `b` lies strictly within `tolerance_meters` of `a`.
pub fn within_meters(a: Coord<f64>, b: Coord<f64>, tolerance_meters: f64) -> bool {
    geodesic_meters(a, b) < tolerance_meters
}
