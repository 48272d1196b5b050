//! # maskdash-tui
//!
//! Interactive page-based dashboard using ratatui with Elm architecture.

pub mod footer;
pub mod header;
pub mod images;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod nav;
pub mod probe;
pub mod report;
pub mod styles;
pub mod table;

pub use logs::LogScrollState;
pub use messages::DashMessage;
pub use model::DashApp;
pub use probe::spawn_probe;
