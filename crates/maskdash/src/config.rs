//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use maskdash_core::{select, select_model, DashError, ModelChoice, Section};

/// Output format for section printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// maskdash: dashboard for precomputed face-mask classifier artifacts.
#[derive(Parser, Debug)]
#[command(name = "maskdash", version, about)]
pub struct AppConfig {
    /// Section to print, by label or slug (accuracy, confusion, gradcam, comparison, report).
    #[arg(short, long)]
    pub section: Option<String>,

    /// Model for the Grad-CAM viewer: mobilenet or cnn.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Directory holding the artifact images.
    #[arg(long, default_value = ".", env = "MASKDASH_ASSETS")]
    pub assets_dir: PathBuf,

    /// Dashboard data file (JSON).
    #[arg(long, env = "MASKDASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// List the dashboard sections and exit.
    #[arg(long)]
    pub list_sections: bool,

    /// Check that every catalog asset is readable.
    #[arg(long)]
    pub check_assets: bool,

    /// Print the effective dashboard configuration as JSON.
    #[arg(long)]
    pub dump_config: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (omit headings and captions).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Requested section, if any.
    pub fn section(&self) -> Result<Option<Section>, DashError> {
        self.section.as_deref().map(select).transpose()
    }

    /// Requested model, falling back to the default choice.
    pub fn model(&self) -> Result<ModelChoice, DashError> {
        self.model
            .as_deref()
            .map_or(Ok(ModelChoice::default()), select_model)
    }
}
