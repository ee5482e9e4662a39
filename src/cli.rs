use crate::api::ApiService;
use crate::config::AppConfig;
use crate::internal::aggregator::{Aggregator, FetchStrategy};
use crate::internal::ranker::rank;
use crate::utils::report::{format_elapsed, format_missing_pages, render_ranking};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Rank the most-commented articles of the articles API.
#[derive(Parser, Debug, Default)]
#[command(name = "top-articles", version)]
pub struct Cli {
    /// Path to a RON config file (searched before the default locations)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of articles to print
    #[arg(long)]
    pub top: Option<usize>,
    /// Page fetch strategy: "sequential" or "concurrent"
    #[arg(long)]
    pub strategy: Option<FetchStrategy>,
    /// Articles endpoint to query
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Command-line flags take precedence over the loaded config.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        config
    }
}

/// Fetch, rank and print the top articles to `out`.
///
/// Only a failure to fetch the first page is an error; missing later pages
/// are reported as a warning line and the run still succeeds.
pub async fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let start = Instant::now();

    let service = ApiService::with_base_url(config.base_url.clone())
        .with_timeout(Duration::from_secs(config.request_timeout_secs));
    let aggregator = Aggregator::new(service, config.strategy);

    let report = aggregator
        .fetch_all_articles()
        .await
        .context("could not fetch the first page of articles")?;

    let ranked = rank(&report.articles, config.top_n);
    tracing::info!(
        fetched = report.articles.len(),
        ranked = ranked.len(),
        "ranking complete"
    );

    writeln!(out, "{}", render_ranking(&ranked, config.top_n))?;
    if let Some(warning) = format_missing_pages(&report.missing_pages) {
        writeln!(out, "{}", warning)?;
    }
    writeln!(out, "\n{}", format_elapsed(start.elapsed()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "top-articles",
            "--top",
            "3",
            "--strategy",
            "sequential",
            "--base-url",
            "http://localhost:8080/api/articles",
        ])
        .unwrap();

        assert_eq!(cli.top, Some(3));
        assert_eq!(cli.strategy, Some(FetchStrategy::Sequential));
        assert_eq!(
            cli.base_url.as_deref(),
            Some("http://localhost:8080/api/articles")
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        let result = Cli::try_parse_from(["top-articles", "--strategy", "parallel"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli {
            top: Some(4),
            strategy: Some(FetchStrategy::Sequential),
            ..Default::default()
        };
        let config = cli.apply(AppConfig::default());
        assert_eq!(config.top_n, 4);
        assert_eq!(config.strategy, FetchStrategy::Sequential);
        assert_eq!(config.base_url, AppConfig::default().base_url);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = Cli::default().apply(AppConfig::default());
        assert_eq!(config, AppConfig::default());
    }
}
