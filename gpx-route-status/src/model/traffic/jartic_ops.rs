//! decoding of the JARTIC open traffic payloads.
use super::TrafficRecord;
use crate::model::{geocode::PrefectureCode, service::ServiceError};
use geo::{Coord, LineString};
use geojson::{GeoJson, JsonObject};
use serde::Deserialize;
use serde_json::Value;

const SERVICE: &str = "JARTIC";

#[derive(Deserialize)]
struct TargetResponse {
    target: Value,
}

/// reads the current data generation from a `target.json` body. the
/// generation becomes a path segment, so only ASCII alphanumerics are accepted.
pub fn parse_target(body: &str) -> Result<String, ServiceError> {
    let response: TargetResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::DecodeError {
            service: SERVICE,
            message: format!("target.json: {e}"),
        })?;
    let target = match response.target {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => {
            return Err(ServiceError::DecodeError {
                service: SERVICE,
                message: format!("unexpected target value {other}"),
            })
        }
    };
    if target.is_empty() || !target.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ServiceError::DecodeError {
            service: SERVICE,
            message: format!("invalid target '{target}'"),
        });
    }
    Ok(target)
}

/// decodes a prefecture FeatureCollection into traffic records, one per
/// feature, in feature order.
pub fn parse_traffic_geojson(
    body: &str,
    prefecture_code: &PrefectureCode,
) -> Result<Vec<TrafficRecord>, ServiceError> {
    let geojson = body
        .parse::<GeoJson>()
        .map_err(|e| ServiceError::DecodeError {
            service: SERVICE,
            message: format!("prefecture {prefecture_code}: {e}"),
        })?;
    let features = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(_) => {
            return Err(ServiceError::DecodeError {
                service: SERVICE,
                message: format!("prefecture {prefecture_code}: expected a FeatureCollection"),
            })
        }
    };
    let empty = JsonObject::new();
    let records = features
        .into_iter()
        .map(|feature| {
            let props = feature.properties.as_ref().unwrap_or(&empty);
            TrafficRecord {
                prefecture_code: *prefecture_code,
                work_type: string_property(props, "c"),
                direction: string_property(props, "d"),
                location_description: string_property(props, "i"),
                coordinates: coordinate_property(props, "p"),
                route_name: string_property(props, "r"),
                restriction_description: string_property(props, "rd"),
                geometry: feature.geometry.as_ref().and_then(line_geometry),
            }
        })
        .collect();
    Ok(records)
}

/// string view of a property. numbers are rendered as text; null and blank
/// strings are absent.
fn string_property(props: &JsonObject, key: &str) -> Option<String> {
    match props.get(key)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// `[[lon, lat], ...]` property as coordinates. malformed pairs are skipped.
fn coordinate_property(props: &JsonObject, key: &str) -> Vec<Coord<f64>> {
    match props.get(key) {
        Some(Value::Array(pairs)) => pairs
            .iter()
            .filter_map(|pair| {
                let pair = pair.as_array()?;
                let x = pair.first()?.as_f64()?;
                let y = pair.get(1)?.as_f64()?;
                Some(Coord { x, y })
            })
            .collect(),
        _ => vec![],
    }
}

fn line_geometry(geometry: &geojson::Geometry) -> Option<LineString<f64>> {
    let positions = match &geometry.value {
        geojson::Value::LineString(line) => line,
        geojson::Value::MultiLineString(lines) => lines.first()?,
        _ => return None,
    };
    let coords: Vec<Coord<f64>> = positions
        .iter()
        .filter_map(|p| match p.as_slice() {
            [x, y, ..] => Some(Coord { x: *x, y: *y }),
            _ => None,
        })
        .collect();
    if coords.len() < 2 {
        None
    } else {
        Some(LineString::new(coords))
    }
}
