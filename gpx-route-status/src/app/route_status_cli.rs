use crate::model::RouteStatusError;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// checks a GPX route against current Japanese road closures
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RouteStatusCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: RouteStatusOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum RouteStatusOperation {
    /// finds restricted and closed roads along a route and writes the
    /// dashboard, restricted roads CSV and map figure.
    Check {
        /// GPX file with the route
        #[arg(short, long)]
        gpx_file: String,
        /// reverse geocode every n-th GPX point (200, 300 and 400 are typical).
        /// overrides the configuration file.
        #[arg(short, long)]
        interval: Option<usize>,
        /// optional .toml or .json configuration file
        #[arg(short, long)]
        configuration_file: Option<String>,
        /// output directory path.
        #[arg(short, long, default_value_t = String::from("."))]
        output_directory: String,
    },
    /// lists the road names, prefectures and road numbers along a route as
    /// JSON, without fetching traffic information.
    Roads {
        /// GPX file with the route
        #[arg(short, long)]
        gpx_file: String,
        /// reverse geocode every n-th GPX point
        #[arg(short, long)]
        interval: Option<usize>,
        /// optional .toml or .json configuration file
        #[arg(short, long)]
        configuration_file: Option<String>,
    },
}

impl RouteStatusOperation {
    pub fn run(&self) -> Result<(), RouteStatusError> {
        match self {
            RouteStatusOperation::Check {
                gpx_file,
                interval,
                configuration_file,
                output_directory,
            } => crate::app::check::run_check(
                Path::new(gpx_file),
                *interval,
                configuration_file.as_deref(),
                Path::new(output_directory),
            ),
            RouteStatusOperation::Roads {
                gpx_file,
                interval,
                configuration_file,
            } => crate::app::roads::run_roads(
                Path::new(gpx_file),
                *interval,
                configuration_file.as_deref(),
            ),
        }
    }
}
