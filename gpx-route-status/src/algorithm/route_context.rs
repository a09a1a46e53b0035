use crate::model::{
    geocode::{Address, PrefectureCode, ReverseGeocoder},
    gpx::Route,
    RouteStatusError,
};
use kdam::{Bar, BarExt};
use serde::Serialize;
use std::collections::BTreeSet;

/// road names and prefectures found along a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteContext {
    pub road_names: BTreeSet<String>,
    pub prefecture_codes: BTreeSet<PrefectureCode>,
}

impl RouteContext {
    /// adds the road name and prefecture of an address. addresses outside
    /// Japan contribute their road name only.
    pub fn add_address(&mut self, address: &Address) {
        if let Some(road) = address.road.as_ref().filter(|r| !r.trim().is_empty()) {
            self.road_names.insert(road.clone());
        }
        if let Some(iso) = &address.iso3166_2_lvl4 {
            match PrefectureCode::from_iso3166(iso) {
                Ok(code) => {
                    self.prefecture_codes.insert(code);
                }
                Err(e) => log::warn!("ignoring subdivision of reverse geocoded address: {e}"),
            }
        }
    }
}

/// reverse geocodes every `interval`-th route point, one request at a time,
/// collecting the unique road names and prefecture codes.
pub fn resolve_route_context(
    route: &Route,
    interval: usize,
    geocoder: &dyn ReverseGeocoder,
) -> Result<RouteContext, RouteStatusError> {
    let sampled = route.sample(interval)?;
    log::debug!(
        "reverse geocoding {} of {} route points",
        sampled.len(),
        route.len()
    );
    let mut bar = Bar::builder()
        .total(sampled.len())
        .desc("reverse geocoding")
        .build()
        .map_err(RouteStatusError::InternalError)?;

    let mut context = RouteContext::default();
    for coord in sampled.iter() {
        let address = geocoder.reverse(coord)?;
        context.add_address(&address);
        let _ = bar.update(1);
    }
    eprintln!();
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::{resolve_route_context, RouteContext};
    use crate::model::{
        geocode::{Address, ReverseGeocoder},
        gpx::Route,
        service::ServiceError,
    };
    use geo::Coord;
    use std::cell::RefCell;

    /// answers with addresses by point index (x offset) and records requests.
    struct IndexGeocoder {
        requested: RefCell<Vec<Coord<f64>>>,
    }

    impl ReverseGeocoder for IndexGeocoder {
        fn reverse(&self, coord: &Coord<f64>) -> Result<Address, ServiceError> {
            self.requested.borrow_mut().push(*coord);
            let index = ((coord.x - 137.0) * 1000.0).round() as usize;
            let (road, iso) = match index {
                0..=3 => ("国道19号", "JP-21"),
                4..=6 => ("国道41号", "JP-21"),
                _ => ("国道19号", "JP-20"),
            };
            Ok(Address {
                road: Some(String::from(road)),
                iso3166_2_lvl4: Some(String::from(iso)),
                ..Default::default()
            })
        }
    }

    fn route(n: usize) -> Route {
        let points = (0..n)
            .map(|i| Coord {
                x: 137.0 + i as f64 * 0.001,
                y: 35.5,
            })
            .collect();
        Route::new(points).expect("test invariant failed: route is not empty")
    }

    #[test]
    fn test_unique_roads_and_prefectures() {
        let geocoder = IndexGeocoder {
            requested: RefCell::new(vec![]),
        };
        let context = match resolve_route_context(&route(10), 2, &geocoder) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(geocoder.requested.borrow().len(), 5);
        let roads: Vec<&str> = context.road_names.iter().map(|s| s.as_str()).collect();
        assert_eq!(roads, vec!["国道19号", "国道41号"]);
        let prefs: Vec<String> = context
            .prefecture_codes
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(prefs, vec!["20", "21"]);
    }

    #[test]
    fn test_zero_interval_is_an_error() {
        let geocoder = IndexGeocoder {
            requested: RefCell::new(vec![]),
        };
        assert!(resolve_route_context(&route(3), 0, &geocoder).is_err());
        assert!(geocoder.requested.borrow().is_empty());
    }

    #[test]
    fn test_incomplete_addresses() {
        let mut context = RouteContext::default();
        context.add_address(&Address::default());
        context.add_address(&Address {
            road: Some(String::from("  ")),
            iso3166_2_lvl4: Some(String::from("KR-11")),
            ..Default::default()
        });
        assert!(context.road_names.is_empty());
        assert!(context.prefecture_codes.is_empty());
    }
}
