use super::{dashboard, write_affected_roads_csv};
use crate::{model::RouteStatusError, pipeline::RouteStatusReport};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// paths of the files written for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub dashboard: PathBuf,
    pub csv: PathBuf,
    pub figure: PathBuf,
}

impl OutputFiles {
    pub const DASHBOARD_FILENAME: &'static str = "route_status.html";
    pub const CSV_FILENAME: &'static str = "closed_roads.csv";
    pub const FIGURE_FILENAME: &'static str = "route_figure.json";

    pub fn new(output_directory: &Path) -> OutputFiles {
        OutputFiles {
            dashboard: output_directory.join(Self::DASHBOARD_FILENAME),
            csv: output_directory.join(Self::CSV_FILENAME),
            figure: output_directory.join(Self::FIGURE_FILENAME),
        }
    }
}

/// writes the dashboard, the restricted roads CSV and the figure JSON into
/// `output_directory`, creating it if needed.
pub fn write_outputs(
    report: &RouteStatusReport,
    output_directory: &Path,
) -> Result<OutputFiles, RouteStatusError> {
    std::fs::create_dir_all(output_directory).map_err(|e| {
        RouteStatusError::OutputError(output_directory.display().to_string(), e.to_string())
    })?;
    let files = OutputFiles::new(output_directory);

    let csv_file = create(&files.csv)?;
    write_affected_roads_csv(&report.affected_roads, BufWriter::new(csv_file))?;
    log::info!("wrote {}", files.csv.display());

    let figure_file = create(&files.figure)?;
    let mut figure_writer = BufWriter::new(figure_file);
    serde_json::to_writer(&mut figure_writer, &report.figure)?;
    figure_writer.flush().map_err(|e| {
        RouteStatusError::OutputError(files.figure.display().to_string(), e.to_string())
    })?;
    log::info!("wrote {}", files.figure.display());

    let html = dashboard::render_dashboard(report, OutputFiles::CSV_FILENAME)?;
    std::fs::write(&files.dashboard, html).map_err(|e| {
        RouteStatusError::OutputError(files.dashboard.display().to_string(), e.to_string())
    })?;
    log::info!("wrote {}", files.dashboard.display());

    Ok(files)
}

fn create(path: &Path) -> Result<File, RouteStatusError> {
    File::create(path)
        .map_err(|e| RouteStatusError::OutputError(path.display().to_string(), e.to_string()))
}
