use super::RestrictionStatus;
use crate::{algorithm::geo_ops, model::geocode::PrefectureCode};
use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// one JARTIC traffic information entry for a prefecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRecord {
    pub prefecture_code: PrefectureCode,
    /// `c`
    pub work_type: Option<String>,
    /// `d`
    pub direction: Option<String>,
    /// `i`
    pub location_description: Option<String>,
    /// `p`, start and end points of the restricted stretch
    pub coordinates: Vec<Coord<f64>>,
    /// `r`
    pub route_name: Option<String>,
    /// `rd`
    pub restriction_description: Option<String>,
    /// feature geometry
    pub geometry: Option<LineString<f64>>,
}

impl TrafficRecord {
    pub fn status(&self) -> RestrictionStatus {
        RestrictionStatus::from_description(self.restriction_description.as_deref())
    }

    /// first and last point of the restricted stretch, if it has two or more.
    pub fn endpoints(&self) -> Option<(Coord<f64>, Coord<f64>)> {
        match self.coordinates.as_slice() {
            [first, .., last] => Some((*first, *last)),
            _ => None,
        }
    }

    /// geodesic length of the restricted stretch between its endpoints in
    /// kilometers, rounded to meters. 0 when the endpoints are unknown.
    pub fn restricted_length_km(&self) -> f64 {
        match self.endpoints() {
            Some((start, end)) => {
                let km = geo_ops::geodesic_meters(start, end) / 1000.0;
                (km * 1000.0).round() / 1000.0
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrafficRecord;
    use crate::model::{geocode::PrefectureCode, traffic::RestrictionStatus};
    use geo::Coord;

    fn record(coordinates: Vec<Coord<f64>>, rd: Option<&str>) -> TrafficRecord {
        TrafficRecord {
            prefecture_code: PrefectureCode::new(21).unwrap(),
            work_type: None,
            direction: None,
            location_description: None,
            coordinates,
            route_name: Some(String::from("国道19号")),
            restriction_description: rd.map(String::from),
            geometry: None,
        }
    }

    #[test]
    fn test_length_of_one_hundredth_degree_latitude() {
        let r = record(
            vec![Coord { x: 137.0, y: 35.0 }, Coord { x: 137.0, y: 35.01 }],
            Some("通行止"),
        );
        // 0.01 degrees of latitude at 35N is 1109.4m on the WGS84 ellipsoid
        assert_eq!(r.restricted_length_km(), 1.109);
        assert_eq!(r.status(), RestrictionStatus::Closed);
    }

    #[test]
    fn test_length_without_endpoints() {
        let r = record(vec![Coord { x: 137.0, y: 35.0 }], None);
        assert_eq!(r.restricted_length_km(), 0.0);
        assert!(r.endpoints().is_none());
        assert_eq!(r.status(), RestrictionStatus::Open);
    }
}
