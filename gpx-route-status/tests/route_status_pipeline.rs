use geo::{line_string, Coord};
use gpx_route_status::{
    config::RouteStatusConfiguration,
    model::{
        geocode::{Address, PrefectureCode, ReverseGeocoder},
        gpx::{GpxError, Route},
        overpass::RoadRefSource,
        service::ServiceError,
        traffic::{TrafficRecord, TrafficSource},
        RouteStatusError,
    },
    output::{self, OutputFiles},
    pipeline::{RouteStatusPipeline, RouteStatusReport},
};
use std::{cell::Cell, collections::HashMap, path::PathBuf};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("resources")
        .join("test_route.gpx")
}

fn fixture_route() -> Route {
    match Route::from_gpx_file(fixture_path()) {
        Ok(r) => r,
        Err(e) => panic!("{e}"),
    }
}

fn pref(code: u8) -> PrefectureCode {
    PrefectureCode::new(code).expect("test invariant failed: valid prefecture code")
}

/// the fixture runs west to east; its west half is 中山道 in Gifu, the
/// midpoint is 飛騨街道 and the east end is 中山道 in Nagano.
struct FakeGeocoder {
    calls: Cell<usize>,
}

impl ReverseGeocoder for FakeGeocoder {
    fn reverse(&self, coord: &Coord<f64>) -> Result<Address, ServiceError> {
        self.calls.set(self.calls.get() + 1);
        let (road, iso) = if coord.x < 137.4985 {
            ("中山道", "JP-21")
        } else if coord.x < 137.5005 {
            ("飛騨街道", "JP-21")
        } else {
            ("中山道", "JP-20")
        };
        Ok(Address {
            road: Some(String::from(road)),
            iso3166_2_lvl4: Some(String::from(iso)),
            ..Default::default()
        })
    }
}

struct FakeOverpass;

impl RoadRefSource for FakeOverpass {
    fn way_refs(&self, road_name: &str) -> Result<Vec<String>, ServiceError> {
        let refs = match road_name {
            "中山道" => vec![String::from("19")],
            "飛騨街道" => vec![String::from("41;158")],
            _ => vec![],
        };
        Ok(refs)
    }
}

/// Gifu answers with records, Nagano fails.
struct FakeJartic {
    records: HashMap<PrefectureCode, Vec<TrafficRecord>>,
}

impl TrafficSource for FakeJartic {
    fn traffic_records(
        &self,
        prefecture_code: &PrefectureCode,
    ) -> Result<Vec<TrafficRecord>, ServiceError> {
        match self.records.get(prefecture_code) {
            Some(records) => Ok(records.clone()),
            None => Err(ServiceError::StatusError {
                service: "JARTIC",
                url: format!("https://example.invalid/R{prefecture_code}.json"),
                status: 404,
            }),
        }
    }
}

fn record(route_name: &str, rd: Option<&str>, coordinates: Vec<Coord<f64>>) -> TrafficRecord {
    TrafficRecord {
        prefecture_code: pref(21),
        work_type: Some(String::from("工事")),
        direction: Some(String::from("上り")),
        location_description: Some(String::from("中津川市")),
        coordinates,
        route_name: Some(String::from(route_name)),
        restriction_description: rd.map(String::from),
        geometry: Some(line_string![(x: 137.4975, y: 35.4930), (x: 137.4985, y: 35.4935)]),
    }
}

fn fake_jartic(route: &Route) -> FakeJartic {
    let p = route.points();
    let gifu = vec![
        record("国道１９号", Some("通行止"), vec![p[1], p[4]]),
        record("国道41号", Some("片側交互通行"), vec![p[5], p[6]]),
        record("国道19号", None, vec![p[2], p[3]]),
        record("国道256号", Some("通行止"), vec![p[0], p[8]]),
    ];
    FakeJartic {
        records: HashMap::from([(pref(21), gifu)]),
    }
}

fn conf(fail_on_error: bool) -> RouteStatusConfiguration {
    let mut conf = RouteStatusConfiguration {
        gpx_points_interval: 4,
        ..Default::default()
    };
    conf.traffic.fail_on_error = fail_on_error;
    conf
}

fn run(conf: &RouteStatusConfiguration) -> Result<RouteStatusReport, RouteStatusError> {
    let geocoder = FakeGeocoder {
        calls: Cell::new(0),
    };
    let jartic = fake_jartic(&fixture_route());
    let pipeline = RouteStatusPipeline::new(&geocoder, &FakeOverpass, &jartic, conf)?;
    pipeline.run_gpx_file(fixture_path())
}

#[test]
fn test_route_with_closure() {
    let report = match run(&conf(false)) {
        Ok(r) => r,
        Err(e) => panic!("{e}"),
    };
    let roads: Vec<&str> = report.context.road_names.iter().map(|s| s.as_str()).collect();
    assert_eq!(roads, vec!["中山道", "飛騨街道"]);
    let prefs: Vec<PrefectureCode> = report.context.prefecture_codes.iter().copied().collect();
    assert_eq!(prefs, vec![pref(20), pref(21)]);
    assert_eq!(report.road_numbers["中山道"].as_str(), "19号");
    assert_eq!(report.road_numbers["飛騨街道"].as_str(), "41号");

    let affected: Vec<&str> = report
        .affected_roads
        .iter()
        .map(|a| a.road_number.as_str())
        .collect();
    assert_eq!(affected, vec!["19号", "41号"]);
    assert_eq!(report.closed_roads.len(), 1);
    assert_eq!(report.closed_roads[0].road_number.as_str(), "19号");
    for closed in report.closed_roads.iter() {
        assert!(report.affected_roads.contains(closed));
    }
    assert_eq!(report.failed_prefectures, vec![pref(20)]);

    // route, restricted road, closed section
    assert_eq!(report.figure.data.len(), 3);
    let names: Vec<&str> = report.figure.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Route", "Restricted Road", "Closed Road"]);
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = run(&conf(false)).expect("test invariant failed: pipeline runs");
    let second = run(&conf(false)).expect("test invariant failed: pipeline runs");
    assert_eq!(first.affected_roads, second.affected_roads);
    assert_eq!(first.closed_roads, second.closed_roads);
    assert_eq!(first.figure, second.figure);
}

#[test]
fn test_fail_on_error_aborts() {
    let result = run(&conf(true));
    assert!(matches!(
        result,
        Err(RouteStatusError::ServiceError {
            source: ServiceError::StatusError { status: 404, .. }
        })
    ));
}

#[test]
fn test_empty_route_is_an_input_error() {
    let geocoder = FakeGeocoder {
        calls: Cell::new(0),
    };
    let jartic = FakeJartic {
        records: HashMap::new(),
    };
    let conf = conf(false);
    let pipeline = RouteStatusPipeline::new(&geocoder, &FakeOverpass, &jartic, &conf)
        .expect("test invariant failed: valid configuration");
    let gpx = r#"<?xml version="1.0"?><gpx version="1.1"><trk><trkseg></trkseg></trk></gpx>"#;
    let result = pipeline.run_gpx_str(gpx);
    assert!(matches!(
        result,
        Err(RouteStatusError::GpxError {
            source: GpxError::NoTrackPoints
        })
    ));
    assert_eq!(geocoder.calls.get(), 0);
}

#[test]
fn test_zero_interval_rejected() {
    let geocoder = FakeGeocoder {
        calls: Cell::new(0),
    };
    let jartic = FakeJartic {
        records: HashMap::new(),
    };
    let conf = RouteStatusConfiguration {
        gpx_points_interval: 0,
        ..Default::default()
    };
    assert!(RouteStatusPipeline::new(&geocoder, &FakeOverpass, &jartic, &conf).is_err());
}

#[test]
fn test_write_outputs() {
    let report = run(&conf(false)).expect("test invariant failed: pipeline runs");
    let dir = tempfile::tempdir().expect("test invariant failed: can create temp dir");
    let out = dir.path().join("out");
    let files = match output::write_outputs(&report, &out) {
        Ok(f) => f,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(files, OutputFiles::new(&out));

    let csv = std::fs::read_to_string(&files.csv).expect("test invariant failed: csv written");
    assert_eq!(csv.lines().count(), 3);

    let html = std::fs::read_to_string(&files.dashboard)
        .expect("test invariant failed: dashboard written");
    assert!(html.contains("GPX Route Viewer with Closed Roads"));
    assert!(html.contains("通行止"));
    assert!(html.contains("href=\"closed_roads.csv\""));
    assert!(html.contains("prefectures: 20"));

    let figure: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&files.figure).expect("test invariant failed: figure written"),
    )
    .expect("test invariant failed: figure is json");
    assert_eq!(figure["data"].as_array().map(|d| d.len()), Some(3));
}
