// src/core/entropy.rs

/// Estimate password entropy in bits.
///
/// The keyspace is the sum of the character classes present in the
/// password: lowercase (26), uppercase (26), digits (10) and symbols (32).
/// Entropy is `length * log2(keyspace)`, rounded to two decimals.
pub fn calculate_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut charset_size = 0u32;

    if password.chars().any(|c| c.is_lowercase()) {
        charset_size += 26;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        charset_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        charset_size += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        charset_size += 32; // common symbols
    }

    let entropy = password.chars().count() as f64 * f64::from(charset_size).log2();
    (entropy * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_entropy() {
        assert_eq!(calculate_entropy(""), 0.0);
    }

    #[test]
    fn test_low_entropy_password() {
        assert!(calculate_entropy("abc") < 30.0);
    }

    #[test]
    fn test_high_entropy_password() {
        assert!(calculate_entropy("xA9$Lp!2") > 40.0);
    }

    #[test]
    fn test_entropy_never_negative() {
        for pwd in ["a", "A", "1", "!", "aA1!", "        "] {
            assert!(calculate_entropy(pwd) >= 0.0);
        }
    }

    #[test]
    fn test_more_classes_means_more_entropy() {
        // Same length, strictly more character classes.
        assert!(calculate_entropy("abcdefgh") < calculate_entropy("abcDEF12"));
        assert!(calculate_entropy("abcDEF12") < calculate_entropy("abcDE12!"));
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let entropy = calculate_entropy("abc");
        assert_eq!(entropy, (entropy * 100.0).round() / 100.0);
    }

    #[test]
    fn test_class_counted_once() {
        // Repetition of a class must not grow the charset.
        assert_eq!(calculate_entropy("aaaa"), calculate_entropy("abcd"));
    }
}
