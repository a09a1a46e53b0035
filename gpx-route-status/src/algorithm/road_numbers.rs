use crate::model::{
    overpass::{RoadNumber, RoadRefSource},
    service::ServiceError,
};
use std::collections::{BTreeMap, BTreeSet};

/// looks up the road number of every road name, one Overpass query per name.
pub fn resolve_road_numbers(
    road_names: &BTreeSet<String>,
    source: &dyn RoadRefSource,
) -> Result<BTreeMap<String, RoadNumber>, ServiceError> {
    let mut result = BTreeMap::new();
    for name in road_names.iter() {
        let refs = source.way_refs(name)?;
        let number = RoadNumber::from_lookup(name, &refs);
        log::debug!("{name} -> {number}");
        result.insert(name.clone(), number);
    }
    Ok(result)
}
