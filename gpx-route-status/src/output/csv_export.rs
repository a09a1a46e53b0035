use crate::model::traffic::AffectedRoad;
use itertools::Itertools;
use serde::Serialize;
use std::io::Write;

/// one row of `closed_roads.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectedRoadRow {
    pub road_number: String,
    pub prefecture_code: String,
    pub work_type: Option<String>,
    pub direction: Option<String>,
    pub location_description: Option<String>,
    pub route_name: Option<String>,
    pub restriction_description: Option<String>,
    pub distance_km: f64,
    /// `[[lon, lat], ...]`
    pub coordinates: String,
}

impl From<&AffectedRoad> for AffectedRoadRow {
    fn from(value: &AffectedRoad) -> Self {
        let record = &value.record;
        let coordinates = format!(
            "[{}]",
            record
                .coordinates
                .iter()
                .map(|c| format!("[{}, {}]", c.x, c.y))
                .join(", ")
        );
        AffectedRoadRow {
            road_number: value.road_number.to_string(),
            prefecture_code: record.prefecture_code.to_string(),
            work_type: record.work_type.clone(),
            direction: record.direction.clone(),
            location_description: record.location_description.clone(),
            route_name: record.route_name.clone(),
            restriction_description: record.restriction_description.clone(),
            distance_km: value.distance_km,
            coordinates,
        }
    }
}

/// writes affected roads as CSV with a header row. an empty list still
/// writes the header.
pub fn write_affected_roads_csv<W: Write>(
    affected: &[AffectedRoad],
    sink: W,
) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record([
        "road_number",
        "prefecture_code",
        "work_type",
        "direction",
        "location_description",
        "route_name",
        "restriction_description",
        "distance_km",
        "coordinates",
    ])?;
    for row in affected.iter().map(AffectedRoadRow::from) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
