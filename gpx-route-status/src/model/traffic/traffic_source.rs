use super::TrafficRecord;
use crate::model::{geocode::PrefectureCode, service::ServiceError};

/// current traffic information for a prefecture.
pub trait TrafficSource {
    fn traffic_records(
        &self,
        prefecture_code: &PrefectureCode,
    ) -> Result<Vec<TrafficRecord>, ServiceError>;
}
