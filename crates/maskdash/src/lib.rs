//! maskdash library: application logic for the artifact dashboard.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod version;
