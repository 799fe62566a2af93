//! CLI entrypoint for mom-generator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use mom_application::{ExtractionLogger, NoExtractionLogger, ProcessUploadUseCase};
use mom_infrastructure::{
    ConfigLoader, ConfigValidationError, FileConfig, GeminiClient, GeminiSettings,
    ImageCrateDecoder, JsonlExtractionLogger,
};
use mom_presentation::{Cli, Command, ExtractCommand, WebShellState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let _log_guard = init_logging(&cli)?;

    info!("Starting mom-generator");

    // === Configuration ===
    ConfigLoader::load_dotenv();
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    match run(cli.command.clone(), cli.quiet, &config).await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => match e.downcast_ref::<ConfigValidationError>() {
            Some(missing @ ConfigValidationError::MissingApiKey(_)) => {
                eprintln!("{}", missing);
                std::process::exit(1);
            }
            _ => Err(e),
        },
    }
}

/// Build the use case and dispatch; `Ok(false)` means the extraction failed
async fn run(command: Option<Command>, quiet: bool, config: &FileConfig) -> Result<bool> {
    // A missing credential halts here, before anything is bound.
    let use_case = build_use_case(config)?;

    match command {
        Some(Command::Extract { path, output }) => {
            let command = ExtractCommand::new(use_case)
                .with_output(output.into())
                .with_quiet(quiet);
            Ok(command.run(path).await)
        }
        Some(Command::Serve { bind }) => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            serve(&bind, use_case, config.server.max_upload_bytes).await?;
            Ok(true)
        }
        None => {
            serve(&config.server.bind, use_case, config.server.max_upload_bytes).await?;
            Ok(true)
        }
    }
}

/// Wire the adapters into the use case
fn build_use_case(config: &FileConfig) -> Result<ProcessUploadUseCase> {
    let api_key = config.provider.require_api_key()?;

    let client = GeminiClient::new(
        GeminiSettings::new(api_key)
            .with_model(&config.provider.model)
            .with_base_url(&config.provider.base_url),
    )?;

    let logger: Arc<dyn ExtractionLogger> = match &config.logging.extraction_log {
        Some(path) => match JsonlExtractionLogger::new(path) {
            Some(logger) => {
                info!(path = %path.display(), "Writing extraction log");
                Arc::new(logger)
            }
            None => Arc::new(NoExtractionLogger),
        },
        None => Arc::new(NoExtractionLogger),
    };

    Ok(
        ProcessUploadUseCase::new(Arc::new(client), Arc::new(ImageCrateDecoder::new()))
            .with_logger(logger)
            .with_behavior(config.behavior.to_behavior_config()),
    )
}

async fn serve(bind: &str, use_case: ProcessUploadUseCase, max_upload_bytes: usize) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;

    if let Ok(addr) = listener.local_addr() {
        println!("Minutes of Meeting (MoM) Generator running at http://{}", addr);
    }

    mom_presentation::serve(listener, WebShellState::new(use_case), max_upload_bytes).await?;
    Ok(())
}

/// Initialize logging based on verbosity level
///
/// With `--log-dir`, logs are also written to a daily-rotated file there.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(dir) = &cli.log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    if dir.exists() && !dir.is_dir() {
        bail!("--log-dir {} is not a directory", dir.display());
    }

    let appender = tracing_appender::rolling::daily(dir, "mom-generator.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_credential() -> FileConfig {
        let mut config = FileConfig::default();
        config.provider.api_key_env = "MOM_TEST_UNSET_CREDENTIAL".to_string();
        config.provider.api_key = None;
        config
    }

    #[test]
    fn test_missing_credential_is_reported_with_exact_message() {
        let err = build_use_case(&config_without_credential())
            .err()
            .expect("expected missing credential error");

        assert!(matches!(
            err.downcast_ref::<ConfigValidationError>(),
            Some(ConfigValidationError::MissingApiKey(_))
        ));
        assert_eq!(
            err.to_string(),
            "API key not found. Please set the MOM_TEST_UNSET_CREDENTIAL environment variable."
        );
    }

    #[tokio::test]
    async fn test_missing_credential_stops_before_binding() {
        let reserved = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = reserved.local_addr().unwrap();
        drop(reserved);

        let result = run(
            Some(Command::Serve {
                bind: Some(addr.to_string()),
            }),
            true,
            &config_without_credential(),
        )
        .await;

        assert!(result.is_err());
        // The port is still free, so the server never bound it.
        assert!(TcpListener::bind(addr).await.is_ok());
    }

    #[test]
    fn test_inline_credential_builds_use_case() {
        let mut config = config_without_credential();
        config.provider.api_key = Some("inline-key".to_string());
        assert!(build_use_case(&config).is_ok());
    }
}
