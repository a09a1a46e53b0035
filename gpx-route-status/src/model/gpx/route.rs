use super::{gpx_ops, GpxError};
use geo::{Coord, LineString};
use std::path::Path;

/// ordered coordinates of a GPX track. x is longitude, y is latitude.
/// a route always holds at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Coord<f64>>,
}

impl Route {
    pub fn new(points: Vec<Coord<f64>>) -> Result<Route, GpxError> {
        if points.is_empty() {
            return Err(GpxError::NoTrackPoints);
        }
        Ok(Route { points })
    }

    pub fn from_gpx_file<P: AsRef<Path>>(path: P) -> Result<Route, GpxError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GpxError::ReadError(path.display().to_string(), e))?;
        let route = Route::from_gpx_str(&text)?;
        log::info!("Number of points is {}.", route.len());
        Ok(route)
    }

    pub fn from_gpx_str(text: &str) -> Result<Route, GpxError> {
        Route::new(gpx_ops::read_points(text)?)
    }

    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// every `interval`-th point, starting with the first one.
    pub fn sample(&self, interval: usize) -> Result<Vec<Coord<f64>>, GpxError> {
        if interval == 0 {
            return Err(GpxError::InvalidSampleInterval(interval));
        }
        Ok(self.points.iter().step_by(interval).cloned().collect())
    }

    pub fn latitudes(&self) -> Vec<f64> {
        self.points.iter().map(|c| c.y).collect()
    }

    pub fn longitudes(&self) -> Vec<f64> {
        self.points.iter().map(|c| c.x).collect()
    }

    /// arithmetic mean of the route coordinates.
    pub fn center(&self) -> Coord<f64> {
        let n = self.points.len() as f64;
        let (x, y) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(x, y), c| (x + c.x, y + c.y));
        Coord { x: x / n, y: y / n }
    }

    pub fn to_linestring(&self) -> LineString<f64> {
        LineString::new(self.points.clone())
    }
}
