use clap::Parser;
use std::process::ExitCode;
use top_articles::cli::{self, Cli};
use top_articles::config::{AppConfig, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration first to get logging settings; its outcome is
    // logged once the subscriber is installed.
    let loaded = AppConfig::load(args.config.as_deref());
    let config = args.apply(loaded.config.clone());
    let _guard = init_tracing(&config.logging);
    loaded.log();

    let mut stdout = std::io::stdout();
    match cli::run(&config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install the global subscriber. stdout carries the report, so logs go to
/// stderr or, when `log_directory` is set, to a daily rotating file. The
/// returned guard must live until exit to flush the file writer.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    // If RUST_LOG is set, it takes precedence.
    // Otherwise, build from config.
    let env_filter = match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::EnvFilter::from_default_env(),
        Err(_) => tracing_subscriber::EnvFilter::new(logging.filter_directive()),
    };

    match logging.log_directory.as_deref() {
        Some(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, "top-articles.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(non_blocking)
                .with_ansi(false)
                .compact()
                .init();

            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .compact()
                .init();

            None
        }
    }
}
