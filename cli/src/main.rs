//! CLI entrypoint for query-assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use assistant_application::{LlmGateway, RequestController};
use assistant_domain::Model;
use assistant_infrastructure::{ApiKey, ConfigLoader, FileConfig, GeminiGateway};
use assistant_presentation::{Cli, ConsoleFormatter, SpinnerObserver, TuiApp, TuiOptions};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "query-assistant.log";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    info!("Starting query-assistant");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(name) = &cli.model {
        let Ok(model) = name.parse::<Model>();
        config.gemini.model = model;
    }

    config.validate()?;

    if cli.show_config {
        println!("Effective configuration:");
        print!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    ConsoleFormatter::configure_color(config.output.color);

    // === Dependency Injection ===
    let api_key = ApiKey::from_env();
    if api_key.is_none() {
        warn!("No API key in GEMINI_API_KEY or API_KEY; requests will fail");
    }
    let gateway: Arc<dyn LlmGateway> =
        Arc::new(GeminiGateway::from_config(&config.gemini, api_key));
    info!(model = %gateway.model(), base_url = %config.gemini.base_url, "Gateway ready");

    match cli.question.clone() {
        Some(question) => run_once(&cli, &config, gateway, question).await,
        None => {
            let options = TuiOptions {
                tick: Duration::from_millis(config.tui.tick_millis),
                max_input_height: config.tui.max_input_height,
            };
            TuiApp::new(RequestController::new(gateway), options)
                .run()
                .await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One-shot mode: submit once, print the outcome, exit non-zero on failure
async fn run_once(
    cli: &Cli,
    config: &FileConfig,
    gateway: Arc<dyn LlmGateway>,
    question: String,
) -> Result<ExitCode> {
    let model = gateway.model().to_string();
    let mut controller = RequestController::new(gateway);
    if !cli.quiet {
        let tick = Duration::from_millis(config.tui.tick_millis);
        controller = controller.with_observer(Arc::new(SpinnerObserver::new(model.clone(), tick)));
    }

    if cli.verbose > 0 {
        eprint!("{}", ConsoleFormatter::question_header(&question, &model));
    }

    controller.set_query(question);
    if !controller.submit().await {
        bail!("Question cannot be empty");
    }

    let state = controller.state();
    let output = ConsoleFormatter::format(state).unwrap_or_default();
    if state.error().is_some() {
        eprint!("{}", output);
        Ok(ExitCode::FAILURE)
    } else {
        print!("{}", output);
        Ok(ExitCode::SUCCESS)
    }
}

/// Initialize logging based on verbosity level (`RUST_LOG` overrides).
///
/// The interactive screen owns the terminal, so there logs go to a file in
/// the user cache dir; the returned guard flushes it on drop.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    if !cli.is_interactive() || cli.show_config {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("query-assistant")
}
