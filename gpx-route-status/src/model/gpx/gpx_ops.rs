use super::GpxError;
use geo::Coord;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

/// reads the coordinates of a GPX document in document order.
///
/// all `trkpt` elements of all tracks and segments are returned. when the
/// document has no track points, its `rtept` route points are used instead.
/// waypoints (`wpt`) are never part of the route.
///
/// # Arguments
/// * `text` - GPX document
///
/// # Result
/// coordinates with x=longitude, y=latitude, or an error if the document is
/// malformed, holds invalid coordinates, or holds no points at all.
pub fn read_points(text: &str) -> Result<Vec<Coord<f64>>, GpxError> {
    let mut reader = Reader::from_str(text.trim_start_matches('\u{feff}'));
    reader.config_mut().trim_text(true);

    let mut found_gpx = false;
    let mut track_points: Vec<Coord<f64>> = vec![];
    let mut route_points: Vec<Coord<f64>> = vec![];
    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(GpxError::XmlError {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                })
            }
        };
        match event {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"gpx" => found_gpx = true,
                b"trkpt" => track_points.push(read_point(&e, track_points.len())?),
                b"rtept" => route_points.push(read_point(&e, route_points.len())?),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !found_gpx {
        Err(GpxError::NotGpx)
    } else if !track_points.is_empty() {
        Ok(track_points)
    } else if !route_points.is_empty() {
        log::info!(
            "GPX has no track points, using {} route points",
            route_points.len()
        );
        Ok(route_points)
    } else {
        Err(GpxError::NoTrackPoints)
    }
}

fn read_point(element: &BytesStart<'_>, index: usize) -> Result<Coord<f64>, GpxError> {
    let lat = read_degrees(element, "lat", index, 90.0)?;
    let lon = read_degrees(element, "lon", index, 180.0)?;
    Ok(Coord { x: lon, y: lat })
}

fn read_degrees(
    element: &BytesStart<'_>,
    attribute: &'static str,
    index: usize,
    limit: f64,
) -> Result<f64, GpxError> {
    let invalid = |message: String| GpxError::InvalidCoordinate {
        index,
        attribute,
        message,
    };
    let attr = element
        .try_get_attribute(attribute)
        .map_err(|e| invalid(e.to_string()))?
        .ok_or_else(|| invalid(String::from("attribute missing")))?;
    let raw = String::from_utf8_lossy(&attr.value);
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(format!("not a number: '{raw}'")))?;
    if !value.is_finite() || value < -limit || limit < value {
        Err(invalid(format!(
            "{value} is not valid, must be in range [{},{limit}]",
            -limit
        )))
    } else {
        Ok(value)
    }
}
