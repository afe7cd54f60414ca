// ABOUTME: Entry point for the briefcase binary
// ABOUTME: Sets up logging and the runtime, loads settings, and prints the composed workspace

use std::panic;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use briefcase::{App, Args, render_text};
use briefcase_logging::{LoggingConfig, LoggingGuard, init_logging_with_config};
use briefcase_settings::{ClientConfig, HttpSettingsBackend};
use tracing::{info, instrument};

fn help() -> String {
    format!(
        "\
{} {}
{}
{}

USAGE:
    briefcase [FLAGS]

FLAGS:
    -h, --help                     Prints help information
    -v                             Increases logging verbosity each use for up to 3 times
    --log <file>                   Specifies a file to use for logging
    --api-url <url>                Base URL of the backend (overrides API_URL)
    -V, --version                  Prints version information
",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_DESCRIPTION"),
    )
}

fn setup_logging(verbosity: u64, log_file: Option<PathBuf>) -> Result<LoggingGuard> {
    let mut config =
        LoggingConfig::from_env().context("Failed to create logging config from environment")?;

    // Command line verbosity overrides the environment
    let level = match verbosity {
        0 => None,
        1 => Some(briefcase_logging::Level::INFO),
        2 => Some(briefcase_logging::Level::DEBUG),
        _3_or_more => Some(briefcase_logging::Level::TRACE),
    };
    if let Some(level) = level {
        config.level = level.into();
    }
    if let Some(path) = log_file {
        config.file.path = path;
    }

    init_logging_with_config(config).context("Failed to initialize briefcase logging")
}

#[instrument]
fn install_panic_handler() {
    panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));

        let panic_message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };

        briefcase_logging::error!(
            panic_message = %panic_message,
            location = ?location,
            thread = ?std::thread::current().name(),
            "Application panic occurred"
        );

        if let Ok(backtrace) = std::env::var("RUST_BACKTRACE") {
            if backtrace == "1" || backtrace == "full" {
                let bt = std::backtrace::Backtrace::capture();
                eprintln!("Backtrace:\n{bt:?}");
            }
        }

        eprintln!("Fatal error: {panic_message}");
        if let Some(loc) = &location {
            eprintln!("Location: {loc}");
        }

        std::process::exit(1);
    }));
}

async fn run(config: ClientConfig) -> Result<()> {
    let backend = HttpSettingsBackend::new(&config).context("Failed to build HTTP client")?;
    info!(url = backend.url(), "Using settings endpoint");

    let mut app = App::new(Arc::new(backend));
    app.start().await;

    print!("{}", render_text(&app.view()));

    app.shutdown();
    Ok(())
}

fn main() -> Result<()> {
    install_panic_handler();

    let args = Args::parse_args().context("could not parse arguments")?;

    if args.display_help {
        print!("{}", help());
        return Ok(());
    }

    if args.display_version {
        eprintln!("briefcase {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let _logging = setup_logging(args.verbosity, args.log_file).context("failed to initialize logging")?;

    let mut config = ClientConfig::load().context("failed to load client configuration")?;
    if let Some(url) = args.api_url {
        config.api_url = url;
    }

    let rt = tokio::runtime::Runtime::new().context("Failed to initialize Tokio runtime")?;
    rt.block_on(run(config))
}
