use super::TagFilter;
use itertools::Itertools;
use std::fmt::Display;

/// Overpass QL statement returning the tags (no geometry) of every way that
/// matches all of its filters, as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassQuery {
    filters: Vec<TagFilter>,
}

impl OverpassQuery {
    /// ways carrying exactly this `name` tag.
    pub fn ways_named(road_name: &str) -> OverpassQuery {
        OverpassQuery {
            filters: vec![TagFilter::equals("name", road_name)],
        }
    }
}

impl Display for OverpassQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses = self.filters.iter().map(|c| c.to_string()).join("");
        writeln!(f, "[out:json];")?;
        writeln!(f, "way{clauses};")?;
        write!(f, "out tags;")
    }
}
