use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use passcheck::api;
use passcheck::cli::Args;
use passcheck::core::analyzer::PasswordAnalyzer;
use passcheck::core::breach::BreachChecker;
use passcheck::core::config::Config;
use passcheck::core::dictionary::Dictionary;
use passcheck::core::rate_limit::RateLimiter;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    if let Some(port) = args.port {
        config.web_port = port;
    }
    if let Some(bind) = args.bind.clone() {
        config.web_address = bind;
    }
    if !args.dictionaries.is_empty() {
        config.dictionary_paths = args.dictionaries.iter().map(PathBuf::from).collect();
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_target(true)
        .init();

    log::info!("🔒 Starting PassCheck - Password Security Analyzer");

    // Dictionary is loaded once, before the server accepts traffic, and
    // stays read-only afterwards.
    let mut dictionary = Dictionary::new();
    dictionary.load_files(&config.dictionary_paths);
    log::info!("Dictionary ready with {} entries", dictionary.len());

    let breach_checker = if args.no_breach_check {
        log::warn!("Breach checking disabled, all lookups will report no signal");
        BreachChecker::disabled()
    } else {
        BreachChecker::new(&config.breach_api_url, config.breach_timeout)
    };

    let analyzer = PasswordAnalyzer::new(Arc::new(dictionary), breach_checker);

    let limiter = Arc::new(RateLimiter::new(
        config.rate_limit_max_requests,
        config.rate_limit_window_seconds,
    ));

    // Sweep idle rate-limiter entries every 5 minutes so the client map
    // stays bounded.
    {
        let limiter = Arc::clone(&limiter);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(300));
            loop {
                interval.tick().await;
                limiter.sweep();
            }
        });
    }

    let result = api::start_server(config, analyzer, limiter).await;
    if let Err(ref e) = result {
        log::error!("API server failed: {}", e);
    }
    result
}
