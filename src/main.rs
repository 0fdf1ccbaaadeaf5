use anyhow::{bail, Context};
use clap::Parser;
use product_view::catalog::{HttpCatalog, ProductId};
use product_view::config::{Config, ConfigError};
use product_view::logging::{init_file_logging, init_stderr_logging};
use product_view::plain::{exit_code, fetch_once};
use product_view::ui::product::{plain_text, ProductViewState};
use product_view::ui::runtime::{run as run_ui, RunOptions};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "product-view",
    version,
    about = "Browse storefront catalog products from the terminal"
)]
struct Cli {
    /// Product identifier to open
    id: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u32>,

    /// Fetch the product once, print it and exit
    #[arg(long, requires = "id")]
    plain: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = load_config(&cli)?;
    let catalog = HttpCatalog::new(&config.catalog).context("Failed to create catalog client")?;
    let catalog_label = catalog
        .base_url()
        .host_str()
        .unwrap_or(config.catalog.base_url.as_str())
        .to_string();
    let initial = cli.id.as_deref().and_then(ProductId::parse);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.plain {
        init_stderr_logging(&config);
        let Some(id) = initial else {
            bail!("--plain needs a non-empty product identifier");
        };
        let state = runtime.block_on(fetch_once(id, Arc::new(catalog)));
        print_state(&state);
        return Ok(exit_code(&state));
    }

    let log_path = init_file_logging(&config).context("Failed to open log file")?;
    tracing::info!(
        log = %log_path.display(),
        catalog = %config.catalog.base_url,
        "starting product view"
    );

    run_ui(
        RunOptions {
            initial,
            source: Arc::new(catalog),
            catalog_label,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        },
        runtime.handle(),
    )?;
    Ok(0)
}

/// Config file values, then command-line overrides, validated together.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.catalog.base_url.clone_from(base_url);
    }
    if let Some(timeout) = cli.timeout {
        config.catalog.timeout_seconds = timeout;
    }

    config.validate()?;
    Ok(config)
}

fn print_state(state: &ProductViewState) {
    let text = plain_text(state);
    match state {
        ProductViewState::Error { .. } => eprintln!("{text}"),
        _ => println!("{text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_identifier_and_overrides() {
        let cli = Cli::parse_from([
            "product-view",
            "5",
            "--base-url",
            "http://localhost:3000",
            "--timeout",
            "3",
        ]);
        assert_eq!(cli.id.as_deref(), Some("5"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(cli.timeout, Some(3));
        assert!(!cli.plain);
    }

    #[test]
    fn plain_requires_identifier() {
        assert!(Cli::try_parse_from(["product-view", "--plain"]).is_err());
        assert!(Cli::try_parse_from(["product-view", "--plain", "1"]).is_ok());
    }

    #[test]
    fn overrides_are_validated() {
        let cli = Cli::parse_from([
            "product-view",
            "--config",
            "/nonexistent/product-view.toml",
            "--timeout",
            "0",
        ]);
        assert!(matches!(
            load_config(&cli),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
