// src/core/analyzer.rs
use std::sync::Arc;

use crate::core::breach::{BreachChecker, BreachResult};
use crate::core::dictionary::Dictionary;
use crate::core::entropy::calculate_entropy;
use crate::core::patterns::detect_patterns;
use crate::models::{AnalysisResult, Strength};

/// The scoring engine: fuses entropy, pattern, dictionary and breach
/// signals into a single verdict.
///
/// Stateless apart from the read-only dictionary and the breach client, so
/// it is safe to call concurrently for independent requests. It never fails:
/// a breach-provider outage degrades to a neutral breach signal.
#[derive(Clone)]
pub struct PasswordAnalyzer {
    dictionary: Arc<Dictionary>,
    breach_checker: BreachChecker,
}

impl PasswordAnalyzer {
    pub fn new(dictionary: Arc<Dictionary>, breach_checker: BreachChecker) -> Self {
        Self {
            dictionary,
            breach_checker,
        }
    }

    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    pub async fn analyze(&self, password: &str) -> AnalysisResult {
        let mut issues: Vec<String> = Vec::new();

        let entropy = calculate_entropy(password);

        let pattern_issues = detect_patterns(password);
        issues.extend(pattern_issues.iter().cloned());

        let common = self.dictionary.is_common(password);
        if common {
            issues.push("Common dictionary password".to_string());
        }

        let breach = self.breach_checker.check(password).await;
        if breach == BreachResult::Unavailable {
            // Degrades to "no breach signal"; logged so provider outages
            // stay visible to operators.
            log::warn!("Breach check unavailable, treating as no signal");
        }
        let breach_count = match breach {
            BreachResult::Found(count) => count,
            BreachResult::NotFound | BreachResult::Unavailable => 0,
        };
        let breached = breach_count > 0;
        if breached {
            issues.push("Found in known data breaches".to_string());
        }

        // Base score from entropy
        let mut score = std::cmp::min(100, (entropy * 2.0) as i64);

        // Penalize based on security issues
        if entropy < 40.0 {
            score -= 20;
            issues.push("Low entropy".to_string());
        }

        if !pattern_issues.is_empty() {
            score -= 15;
        }

        // The extra repeat penalty stacks on top of the generic pattern
        // penalty; both apply when a repeat-type issue is present.
        if pattern_issues.iter().any(|issue| issue.contains("Repeated")) {
            score -= 40;
        }

        if common {
            score -= 30;
        }

        if breached {
            score -= 40;
        }

        let score = score.clamp(0, 100);

        // Final strength classification, first match wins
        let strength = if breached || common {
            Strength::Weak
        } else if issues.iter().any(|issue| issue.contains("Repeated")) {
            Strength::Weak
        } else if score >= 70 {
            Strength::Strong
        } else if score >= 40 {
            Strength::Moderate
        } else {
            Strength::Weak
        };

        dedup(&mut issues);

        AnalysisResult {
            score,
            entropy,
            strength,
            issues,
            breach_count,
        }
    }
}

/// Remove duplicate issue tags, keeping first-seen order.
fn dedup(issues: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    issues.retain(|issue| seen.insert(issue.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn analyzer_with(words: &str) -> PasswordAnalyzer {
        let mut dict = Dictionary::new();
        if !words.is_empty() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            write!(file, "{}", words).unwrap();
            dict.load_files(&[file.path()]);
        }
        PasswordAnalyzer::new(Arc::new(dict), BreachChecker::disabled())
    }

    #[tokio::test]
    async fn test_strong_password() {
        let result = analyzer_with("").analyze("xA9$Lp!2").await;
        assert_eq!(result.strength, Strength::Strong);
        assert!(result.issues.is_empty());
        assert_eq!(result.breach_count, 0);
    }

    #[tokio::test]
    async fn test_dictionary_password_is_weak() {
        let result = analyzer_with("password\nadmin\n").analyze("password").await;
        assert_eq!(result.strength, Strength::Weak);
        assert!(result
            .issues
            .contains(&"Common dictionary password".to_string()));
    }

    #[tokio::test]
    async fn test_repeated_characters_force_weak() {
        // "aaaBBBccc999" has enough entropy for a moderate score, but the
        // repeat tag pins the verdict to Weak.
        let result = analyzer_with("").analyze("aaaBBBccc999").await;
        assert_eq!(result.strength, Strength::Weak);
        assert!(result
            .issues
            .contains(&"Repeated characters detected".to_string()));
    }

    #[tokio::test]
    async fn test_score_clamped() {
        let weak = analyzer_with("a\n").analyze("a").await;
        assert!(weak.score >= 0 && weak.score <= 100);

        let strong = analyzer_with("")
            .analyze("xA9$Lp!2mQ7#Wt@5vB3&Zr")
            .await;
        assert!(strong.score >= 0 && strong.score <= 100);
        assert_eq!(strong.strength, Strength::Strong);
    }

    #[tokio::test]
    async fn test_low_entropy_issue_added() {
        let result = analyzer_with("").analyze("zq").await;
        assert!(result.issues.contains(&"Low entropy".to_string()));
        assert_eq!(result.strength, Strength::Weak);
    }

    #[tokio::test]
    async fn test_double_repeat_penalty_applies() {
        // Entropy for "aaaaaaaa" is 8*log2(26) ≈ 37.6 -> base 75.
        // -20 low entropy, -15 pattern, -40 repeat => 0.
        let result = analyzer_with("").analyze("aaaaaaaa").await;
        assert_eq!(result.score, 0);
        assert_eq!(result.strength, Strength::Weak);
    }

    #[tokio::test]
    async fn test_issues_are_deduplicated() {
        let result = analyzer_with("").analyze("aaabbbccc").await;
        let mut sorted = result.issues.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), result.issues.len());
    }

    #[tokio::test]
    async fn test_breach_unavailable_is_neutral() {
        // Disabled checker reports Unavailable; no penalty, no issue.
        let result = analyzer_with("").analyze("xA9$Lp!2").await;
        assert_eq!(result.breach_count, 0);
        assert!(!result
            .issues
            .contains(&"Found in known data breaches".to_string()));
    }
}
