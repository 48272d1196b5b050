//! # maskdash-cli
//!
//! Non-interactive output for the dashboard: text and JSON section
//! rendering, styled status lines, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{JsonPresenter, TextPresenter};
