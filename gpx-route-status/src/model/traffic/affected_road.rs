use super::{RestrictionStatus, TrafficRecord};
use crate::model::overpass::RoadNumber;
use serde::Serialize;

/// a road on the route paired with a traffic record restricting it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectedRoad {
    pub road_number: RoadNumber,
    pub status: RestrictionStatus,
    pub distance_km: f64,
    pub record: TrafficRecord,
}

impl AffectedRoad {
    pub fn new(road_number: RoadNumber, record: TrafficRecord) -> AffectedRoad {
        AffectedRoad {
            road_number,
            status: record.status(),
            distance_km: record.restricted_length_km(),
            record,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }
}
