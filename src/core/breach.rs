// src/core/breach.rs
use sha1::{Digest, Sha1};
use std::time::Duration;

/// Default k-anonymity range endpoint of the Have I Been Pwned password API.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range";

/// Provider timeout; a slow breach database must never stall a caller.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a breach lookup.
///
/// `Unavailable` covers every transport failure, timeout and non-success
/// status: "can't check" is deliberately distinct from "not breached" even
/// though the external response collapses both to a zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreachResult {
    Found(u64),
    NotFound,
    Unavailable,
}

/// Client for the k-anonymity breach lookup.
///
/// Only the first five hex characters of the password's SHA-1 ever leave the
/// process; the returned suffix list is resolved locally.
#[derive(Debug, Clone)]
pub struct BreachChecker {
    client: reqwest::Client,
    api_url: String,
    enabled: bool,
}

impl BreachChecker {
    pub fn new(api_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            enabled: true,
        }
    }

    /// A checker that never goes to the network and always reports
    /// `Unavailable`. Used with `--no-breach-check` and in offline tests.
    pub fn disabled() -> Self {
        let mut checker = Self::new(DEFAULT_API_URL, REQUEST_TIMEOUT);
        checker.enabled = false;
        checker
    }

    /// Check a password against the breach database.
    ///
    /// SHA-1 is mandated by the provider's API. The hash is rendered as
    /// uppercase hex, split into a 5-character prefix (sent) and the
    /// remaining suffix (kept local and matched against the response).
    pub async fn check(&self, password: &str) -> BreachResult {
        if password.is_empty() {
            return BreachResult::NotFound;
        }
        if !self.enabled {
            return BreachResult::Unavailable;
        }

        let digest = Sha1::digest(password.as_bytes());
        let hash = hex::encode_upper(digest);
        let (prefix, suffix) = hash.split_at(5);

        let url = format!("{}/{}", self.api_url, prefix);
        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("Breach API request failed: {}", e);
                return BreachResult::Unavailable;
            }
        };

        if !response.status().is_success() {
            log::warn!("Breach API returned status {}", response.status());
            return BreachResult::Unavailable;
        }

        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to read breach API response: {}", e);
                return BreachResult::Unavailable;
            }
        };

        match match_suffix(&body, suffix) {
            Some(count) => BreachResult::Found(count),
            None => BreachResult::NotFound,
        }
    }
}

/// Scan a `SUFFIX:COUNT` range response for an exact suffix match.
///
/// Comparison is case-sensitive: the provider returns uppercase hex and so
/// do we. Malformed lines are ignored.
fn match_suffix(body: &str, suffix: &str) -> Option<u64> {
    for line in body.lines() {
        let (hash_suffix, count) = match line.trim().split_once(':') {
            Some(parts) => parts,
            None => continue,
        };
        if hash_suffix == suffix {
            return count.trim().parse().ok().filter(|&c: &u64| c > 0);
        }
    }
    None
}
