use crate::model::{
    overpass::RoadNumber,
    traffic::{AffectedRoad, TrafficRecord},
};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

/// traffic records matched to the route's roads.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FilteredRoads {
    /// every matched record with a restriction description
    pub affected: Vec<AffectedRoad>,
    /// the subset of `affected` that is fully closed
    pub closed: Vec<AffectedRoad>,
}

/// intersects road numbers with traffic records by route name.
pub struct RoadTrafficFilter {
    road_number_regex: Regex,
}

impl RoadTrafficFilter {
    pub const ROAD_NUMBER_PATTERN: &'static str = r"\d+号";

    pub fn new() -> Result<RoadTrafficFilter, String> {
        let road_number_regex = Regex::new(Self::ROAD_NUMBER_PATTERN)
            .map_err(|e| format!("invalid road number pattern: {e}"))?;
        Ok(RoadTrafficFilter { road_number_regex })
    }

    /// normalizes a JARTIC route name to a road number, e.g. `国道１９号` to
    /// `19号`. names without a number are returned normalized.
    pub fn clean_road_name(&self, road_name: &str) -> String {
        let normalized = normalize_nfkc(road_name);
        match self.road_number_regex.find(&normalized) {
            Some(m) => String::from(m.as_str()),
            None => normalized,
        }
    }

    /// records whose cleaned route name equals the road number.
    pub fn filter_traffic_by_road<'a>(
        &self,
        road_number: &RoadNumber,
        records: &'a [TrafficRecord],
    ) -> Vec<&'a TrafficRecord> {
        records
            .iter()
            .filter(|r| match &r.route_name {
                Some(name) => self.clean_road_name(name) == road_number.as_str(),
                None => false,
            })
            .collect()
    }

    /// matches every road number against the records, in road number order,
    /// then keeps the restricted ones. each road number is considered once.
    pub fn filter_road_traffic<'a, I>(&self, road_numbers: I, records: &[TrafficRecord]) -> FilteredRoads
    where
        I: IntoIterator<Item = &'a RoadNumber>,
    {
        let unique: BTreeSet<&RoadNumber> = road_numbers.into_iter().collect();
        let matched = unique
            .into_iter()
            .flat_map(|number| {
                self.filter_traffic_by_road(number, records)
                    .into_iter()
                    .map(move |record| AffectedRoad::new(number.clone(), record.clone()))
            })
            .collect::<Vec<_>>();
        split_affected(matched)
    }
}

/// separates restricted from closed roads. records without a restriction
/// description are dropped.
pub fn split_affected(matched: Vec<AffectedRoad>) -> FilteredRoads {
    let affected: Vec<AffectedRoad> = matched
        .into_iter()
        .filter(|a| a.status.is_affected())
        .collect();
    let closed = affected.iter().filter(|a| a.is_closed()).cloned().collect();
    FilteredRoads { affected, closed }
}

/// NFKC compatibility normalization, which folds full-width and circled
/// digits and letters (`１９`, `①`) and the ideographic space.
pub fn normalize_nfkc(text: &str) -> String {
    text.nfkc().collect()
}
