//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};

use maskdash_assets::{audit, FsImageStore, ImageStore};
use maskdash_cli::output::{render_audit, view_json};
use maskdash_cli::ui::{print_success, print_warning};
use maskdash_cli::{JsonPresenter, TextPresenter};
use maskdash_core::{
    exit_codes, ArtifactResolver, DashboardConfig, ModelChoice, Section, SectionPresenter,
    SectionView,
};
use maskdash_tui::{spawn_probe, DashApp};

use crate::config::{AppConfig, OutputFormat};
use crate::errors::AppError;
use crate::version::full_version;

/// Run the application, returning the process exit code on success.
pub fn run(config: &AppConfig) -> Result<u8> {
    tracing::debug!(version = %full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        maskdash_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(success());
    }

    if config.list_sections {
        list_sections();
        return Ok(success());
    }

    // Validate choices before touching the filesystem
    let section = config.section()?;
    let model = config.model()?;

    let (dashboard, source) = DashboardConfig::load(config.config.as_deref())?;
    tracing::info!(%source, "dashboard configuration");

    if config.dump_config {
        println!("{}", dashboard.to_json()?);
        return Ok(success());
    }

    if !config.assets_dir.is_dir() {
        tracing::warn!(
            dir = %config.assets_dir.display(),
            "asset directory does not exist"
        );
    }
    let store: Arc<dyn ImageStore> = Arc::new(FsImageStore::new(&config.assets_dir));

    if config.check_assets {
        return check_assets(config, store.as_ref(), &dashboard);
    }

    let resolver = ArtifactResolver::new(dashboard);

    if config.tui {
        return run_tui(resolver, store, section.unwrap_or_default(), model);
    }

    run_cli(config, &resolver, store.as_ref(), section, model)
}

fn success() -> u8 {
    u8::try_from(exit_codes::SUCCESS).unwrap_or(0)
}

fn list_sections() {
    for (i, section) in Section::ALL.iter().enumerate() {
        println!("{}. {:<11} {}", i + 1, section.slug(), section.label());
    }
}

fn check_assets(
    config: &AppConfig,
    store: &dyn ImageStore,
    dashboard: &DashboardConfig,
) -> Result<u8> {
    let report = audit(store, &dashboard.assets);

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            print!("{}", render_audit(&report));
            if report.all_available() {
                print_success("all assets available");
            } else {
                for status in report.missing() {
                    print_warning(&status.path.display().to_string());
                }
            }
        }
    }

    if report.all_available() {
        Ok(success())
    } else {
        Err(AppError::MissingAssets {
            missing: report.missing().len(),
            total: report.entries.len(),
        }
        .into())
    }
}

fn run_cli(
    config: &AppConfig,
    resolver: &ArtifactResolver,
    store: &dyn ImageStore,
    section: Option<Section>,
    model: ModelChoice,
) -> Result<u8> {
    let sections = section.map_or_else(|| Section::ALL.to_vec(), |s| vec![s]);
    let views = sections
        .into_iter()
        .map(|s| SectionView::build(resolver, s, Some(model)))
        .collect::<Result<Vec<_>, _>>()?;

    match (config.format, section) {
        // A full dump is one JSON array rather than a stream of documents.
        (OutputFormat::Json, None) => {
            let docs: Vec<serde_json::Value> =
                views.iter().map(|v| view_json(v, store)).collect();
            println!("{}", serde_json::to_string_pretty(&docs)?);
        }
        (OutputFormat::Json, Some(_)) => {
            let presenter = JsonPresenter::new(store);
            for view in &views {
                presenter.present(view);
            }
        }
        (OutputFormat::Text, _) => {
            let presenter = TextPresenter::new(store, config.quiet);
            for (i, view) in views.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                presenter.present(view);
            }
        }
    }

    Ok(success())
}

fn run_tui(
    resolver: ArtifactResolver,
    store: Arc<dyn ImageStore>,
    section: Section,
    model: ModelChoice,
) -> Result<u8> {
    let (tx, rx) = crossbeam_channel::unbounded();
    let catalog = resolver.config().assets.clone();
    let probe = spawn_probe(Arc::clone(&store), catalog, tx);

    let mut app = DashApp::new(resolver, store, rx).with_section(section);
    app.model = model;
    app.run().context("terminal UI failed")?;

    if probe.join().is_err() {
        tracing::warn!("asset probe thread panicked");
    }
    Ok(success())
}
