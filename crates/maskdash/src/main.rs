//! maskdash: dashboard for precomputed face-mask classifier artifacts.

use std::process::ExitCode;

use maskdash_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();
    init_tracing(&config);

    match app::run(&config) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            maskdash_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_code(&err))
        }
    }
}

fn init_tracing(config: &config::AppConfig) {
    let builder = tracing_subscriber::fmt().with_env_filter(logging::env_filter(config.verbose));

    // The alternate screen owns the terminal; the dashboard has its own log panel.
    if config.tui {
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
}
