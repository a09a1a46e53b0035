//! standalone HTML page showing the route map, the restricted roads table
//! and the data references.
use crate::{
    model::{geocode::PrefectureCode, traffic::AffectedRoad, RouteStatusError},
    pipeline::RouteStatusReport,
};
use itertools::Itertools;
use std::fmt::{self, Write};

pub const TITLE: &str = "GPX Route Viewer with Closed Roads";
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// renders the dashboard. `csv_file_name` is linked for download relative to
/// the page.
pub fn render_dashboard(
    report: &RouteStatusReport,
    csv_file_name: &str,
) -> Result<String, RouteStatusError> {
    let figure_json = script_safe(&report.figure.to_json()?);
    let mut html = String::new();
    write_dashboard(
        &mut html,
        &figure_json,
        &report.failed_prefectures,
        &report.affected_roads,
        csv_file_name,
    )
    .map_err(|e| RouteStatusError::InternalError(format!("failure rendering dashboard: {e}")))?;
    Ok(html)
}

fn write_dashboard<W: Write>(
    out: &mut W,
    figure_json: &str,
    failed_prefectures: &[PrefectureCode],
    affected_roads: &[AffectedRoad],
    csv_file_name: &str,
) -> fmt::Result {
    write!(
        out,
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
<style>
body {{ font-family: Arial, sans-serif; margin: 1em 2em; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #ccc; padding: 4px 8px; text-align: left; }}
.info {{ background: #e8f0fe; padding: 8px; }}
.warning {{ background: #fdecea; padding: 8px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<h2>GPX Route with Closed Sections Highlighted in Red</h2>
<div id="route-map"></div>
<script>
var figure = {figure_json};
Plotly.newPlot("route-map", figure.data, figure.layout);
</script>
"#,
        title = TITLE,
        cdn = PLOTLY_CDN,
    )?;

    if !failed_prefectures.is_empty() {
        let codes = failed_prefectures.iter().join(", ");
        writeln!(
            out,
            "<p class=\"warning\">Traffic data could not be fetched for prefectures: {}</p>",
            escape_html(&codes)
        )?;
    }

    writeln!(out, "<h2>Restricted Roads Details</h2>")?;
    if affected_roads.is_empty() {
        writeln!(out, "<p class=\"info\">No restricted roads found on this route.</p>")?;
    } else {
        write_restricted_roads_table(out, affected_roads)?;
    }
    write!(
        out,
        r#"<p><a href="{csv}" download="{csv}">Download Restricted Roads Data</a></p>
<hr>
<p><strong>Data References:</strong></p>
<ul>
<li>OSM for road data</li>
<li><a href="https://www.jartic.or.jp/">JARTIC for live traffic data</a></li>
</ul>
</body>
</html>
"#,
        csv = escape_html(csv_file_name),
    )
}

fn write_restricted_roads_table<W: Write>(out: &mut W, affected: &[AffectedRoad]) -> fmt::Result {
    writeln!(
        out,
        "<table>\n<tr><th>road_number</th><th>prefecture_code</th><th>work_type</th>\
         <th>direction</th><th>location_description</th><th>route_name</th>\
         <th>restriction_description</th><th>distance_km</th></tr>"
    )?;
    for road in affected.iter() {
        let r = &road.record;
        let cells = [
            road.road_number.to_string(),
            r.prefecture_code.to_string(),
            r.work_type.clone().unwrap_or_default(),
            r.direction.clone().unwrap_or_default(),
            r.location_description.clone().unwrap_or_default(),
            r.route_name.clone().unwrap_or_default(),
            r.restriction_description.clone().unwrap_or_default(),
            format!("{:.3}", road.distance_km),
        ];
        write!(out, "<tr>")?;
        for cell in cells.iter() {
            write!(out, "<td>{}</td>", escape_html(cell))?;
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// keeps embedded JSON from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
