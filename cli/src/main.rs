//! CLI entrypoint for folio
//!
//! Wires the layers together: config, catalog source, platform adapters,
//! and the terminal page.

use anyhow::{Context, Result};
use clap::Parser;
use folio_application::CatalogSourcePort;
use folio_infrastructure::{
    BuiltinCatalog, ConfigLoader, CrosstermViewportProbe, FileCatalog, Osc52Clipboard,
    SystemOpener,
};
use folio_presentation::{Cli, PageApp};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. The terminal belongs to
    // the page, so diagnostics go to a log file.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _log_guard = init_logging(filter)?;

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("failed to load config: {e}"))?;

    // Catalog source: --catalog flag beats the config file, which beats
    // the built-in data
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone().map(PathBuf::from));
    let source: Box<dyn CatalogSourcePort> = match catalog_path {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(BuiltinCatalog),
    };

    let mut catalog = source.load().await.context("loading catalog")?;
    if !config.contact.is_empty() {
        let contact = config.contact.apply(catalog.contact());
        catalog = catalog.with_contact(contact);
    }

    if cli.dump_catalog {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    info!(services = catalog.len(), "starting folio");

    let page_config = config.page_config();

    // === Dependency Injection ===
    let telemetry = Arc::new(CrosstermViewportProbe::new(page_config.cell));
    let mut app = PageApp::new(
        Arc::new(catalog),
        page_config,
        Arc::new(Osc52Clipboard),
        Arc::new(SystemOpener),
        telemetry,
        !cli.no_splash,
    );

    app.run().await?;
    Ok(())
}

fn init_logging(filter: &str) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio");
    std::fs::create_dir_all(&dir).context("creating log directory")?;

    let appender = tracing_appender::rolling::never(&dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(guard)
}
