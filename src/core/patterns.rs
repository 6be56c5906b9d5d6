// src/core/patterns.rs

/// Known keyboard-row fragments that show up in lazy passwords.
const KEYBOARD_PATTERNS: [&str; 3] = ["qwerty", "asdf", "zxcv"];

const SEQUENTIAL_NUMBERS: [&str; 2] = ["0123456789", "9876543210"];

const SEQUENTIAL_LETTERS: [&str; 2] = [
    "abcdefghijklmnopqrstuvwxyz",
    "zyxwvutsrqponmlkjihgfedcba",
];

/// Scan a password for structural weaknesses.
///
/// Detection is case-insensitive; the password is lowercased before any
/// rule runs. Every rule is evaluated independently, so several issues can
/// fire for the same password.
pub fn detect_patterns(password: &str) -> Vec<String> {
    let mut issues = Vec::new();
    let pwd = password.to_lowercase();

    // Repeated characters (aaa, 111, !!!)
    let chars: Vec<char> = pwd.chars().collect();
    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= 3 {
                issues.push("Repeated characters detected".to_string());
                break;
            }
        } else {
            run = 1;
        }
    }

    // Repeating substring (abab, xyzxyz): the whole password must be an
    // exact integer tiling of a prefix.
    let bytes = pwd.as_bytes();
    let length = bytes.len();
    for size in 1..=length / 2 {
        if length % size == 0 && bytes.chunks(size).all(|chunk| chunk == &bytes[..size]) {
            issues.push("Repeated pattern detected".to_string());
            break;
        }
    }

    // Sequential numbers
    'numbers: for seq in SEQUENTIAL_NUMBERS {
        for i in 0..seq.len() - 2 {
            if pwd.contains(&seq[i..i + 3]) {
                issues.push("Sequential numbers detected".to_string());
                break 'numbers;
            }
        }
    }

    // Sequential letters
    'letters: for seq in SEQUENTIAL_LETTERS {
        for i in 0..seq.len() - 2 {
            if pwd.contains(&seq[i..i + 3]) {
                issues.push("Sequential letters detected".to_string());
                break 'letters;
            }
        }
    }

    // Keyboard patterns, first match wins
    for pattern in KEYBOARD_PATTERNS {
        if pwd.contains(pattern) {
            issues.push("Keyboard pattern detected".to_string());
            break;
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_characters() {
        let issues = detect_patterns("aaaBBB");
        assert!(issues.contains(&"Repeated characters detected".to_string()));
    }

    #[test]
    fn test_repeating_substring() {
        for pwd in ["abab", "xyzxyz", "QZQZQZ"] {
            let issues = detect_patterns(pwd);
            assert!(
                issues.contains(&"Repeated pattern detected".to_string()),
                "expected tiling detection for {pwd}"
            );
        }
    }

    #[test]
    fn test_partial_repeat_does_not_tile() {
        // "abcab" contains a partial repeat but is not a whole-string tiling.
        let issues = detect_patterns("abcab");
        assert!(!issues.contains(&"Repeated pattern detected".to_string()));
    }

    #[test]
    fn test_sequential_numbers() {
        let issues = detect_patterns("test123");
        assert!(issues.contains(&"Sequential numbers detected".to_string()));
    }

    #[test]
    fn test_descending_numbers() {
        let issues = detect_patterns("x987x");
        assert!(issues.contains(&"Sequential numbers detected".to_string()));
    }

    #[test]
    fn test_sequential_letters() {
        let issues = detect_patterns("xyzpass");
        assert!(issues.contains(&"Sequential letters detected".to_string()));
    }

    #[test]
    fn test_keyboard_pattern() {
        let issues = detect_patterns("Qwerty!9");
        assert!(issues.contains(&"Keyboard pattern detected".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_patterns("AAAbbb"), detect_patterns("aaaBBB"));
        assert_eq!(detect_patterns("QWERTY"), detect_patterns("qwerty"));
    }

    #[test]
    fn test_strong_password_no_patterns() {
        assert!(detect_patterns("xA9$Lp!2").is_empty());
    }

    #[test]
    fn test_multiple_rules_fire_together() {
        // "aaa123" repeats a character and contains an ascending digit run.
        let issues = detect_patterns("aaa123");
        assert!(issues.contains(&"Repeated characters detected".to_string()));
        assert!(issues.contains(&"Sequential numbers detected".to_string()));
    }
}
