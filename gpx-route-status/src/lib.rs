pub mod algorithm;
pub mod app;
pub mod config;
pub mod model;
pub mod output;
pub mod pipeline;
