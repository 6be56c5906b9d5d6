// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::core::breach;

// Configuration for the analyzer service
#[derive(Debug, Clone)]
pub struct Config {
    // Web interface
    pub web_address: String,
    pub web_port: u16,
    pub cors_origin: Option<String>,

    // Rate limiting
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_seconds: u64,

    // Breach database
    pub breach_api_url: String,
    pub breach_timeout: Duration,

    // Dictionary
    pub dictionary_paths: Vec<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web interface
            web_address: "0.0.0.0".to_string(),
            web_port: 8000,
            cors_origin: Some("http://localhost:3000".to_string()),

            // Rate limiting: 30 requests per minute per client
            rate_limit_max_requests: 30,
            rate_limit_window_seconds: 60,

            // Breach database
            breach_api_url: breach::DEFAULT_API_URL.to_string(),
            breach_timeout: breach::REQUEST_TIMEOUT,

            // Dictionary
            dictionary_paths: vec![PathBuf::from("data/common_passwords.txt")],

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Ok(origin) = env::var("CORS_ORIGIN") {
            config.cors_origin = if origin == "*" || origin.is_empty() {
                None
            } else {
                Some(origin)
            };
        }

        // Rate limiting
        if let Ok(val) = env::var("RATE_LIMIT_MAX_REQUESTS") {
            if let Ok(max) = val.parse() {
                config.rate_limit_max_requests = max;
            }
        }

        if let Ok(val) = env::var("RATE_LIMIT_WINDOW_SECONDS") {
            if let Ok(window) = val.parse() {
                config.rate_limit_window_seconds = window;
            }
        }

        // Breach database
        if let Ok(url) = env::var("BREACH_API_URL") {
            config.breach_api_url = url;
        }

        if let Ok(val) = env::var("BREACH_TIMEOUT_SECONDS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.breach_timeout = Duration::from_secs(secs);
            }
        }

        // Dictionary
        if let Ok(paths) = env::var("DICTIONARY_PATHS") {
            config.dictionary_paths = paths
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .collect();
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}
