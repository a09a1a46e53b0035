mod map_layout;
mod map_trace;
pub mod plot_ops;
mod route_figure;

pub use map_layout::{Legend, LegendFont, MapCenter, MapLayout, MapboxLayout, Margin};
pub use map_trace::{LineStyle, MapTrace, TraceKind};
pub use route_figure::RouteFigure;
