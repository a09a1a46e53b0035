use super::{MapLayout, MapTrace, TraceKind};
use serde::{Deserialize, Serialize};

/// a plotly figure, serialized as `{"data": [...], "layout": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteFigure {
    pub data: Vec<MapTrace>,
    pub layout: MapLayout,
}

impl RouteFigure {
    pub fn traces_named<'a>(&'a self, kind: TraceKind) -> impl Iterator<Item = &'a MapTrace> + 'a {
        self.data.iter().filter(move |t| t.name == kind.name())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
