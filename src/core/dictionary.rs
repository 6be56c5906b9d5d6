// src/core/dictionary.rs
use std::collections::HashSet;
use std::path::Path;

/// In-memory set of known-common passwords.
///
/// Built once at startup from wordlist files and shared read-only behind an
/// `Arc` afterwards. Membership checks are case-insensitive.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one or more wordlist files into the set.
    ///
    /// Missing files are skipped, not an error. Loading is additive: calling
    /// this again only grows the set. Files are decoded best-effort so a
    /// stray non-UTF8 byte never aborts the load.
    pub fn load_files<P: AsRef<Path>>(&mut self, paths: &[P]) {
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                log::warn!("Dictionary file not found, skipping: {}", path.display());
                continue;
            }

            let raw = match std::fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::warn!("Failed to read dictionary file {}: {}", path.display(), e);
                    continue;
                }
            };

            let mut added = 0usize;
            for line in String::from_utf8_lossy(&raw).lines() {
                let pwd = line.trim().to_lowercase();
                if !pwd.is_empty() && self.words.insert(pwd) {
                    added += 1;
                }
            }
            log::info!("Loaded {} passwords from {}", added, path.display());
        }
    }

    /// Case-insensitive membership test.
    pub fn is_common(&self, password: &str) -> bool {
        self.words.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_common_password_detection() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "password\nadmin").unwrap();

        let mut dict = Dictionary::new();
        dict.load_files(&[file.path()]);

        assert!(dict.is_common("password"));
        assert!(dict.is_common("Admin"));
        assert!(!dict.is_common("xA9$Lp!2"));
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let mut dict = Dictionary::new();
        dict.load_files(&["/nonexistent/wordlist.txt"]);
        assert!(dict.is_empty());
    }

    #[test]
    fn test_loading_is_additive_and_idempotent() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        writeln!(first, "alpha").unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        writeln!(second, "beta").unwrap();

        let mut dict = Dictionary::new();
        dict.load_files(&[first.path()]);
        dict.load_files(&[second.path()]);
        dict.load_files(&[first.path()]);

        assert_eq!(dict.len(), 2);
        assert!(dict.is_common("alpha"));
        assert!(dict.is_common("beta"));
    }

    #[test]
    fn test_blank_lines_and_whitespace_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  hunter2  \n\n   \nLETMEIN").unwrap();

        let mut dict = Dictionary::new();
        dict.load_files(&[file.path()]);

        assert_eq!(dict.len(), 2);
        assert!(dict.is_common("hunter2"));
        assert!(dict.is_common("letmein"));
    }

    #[test]
    fn test_invalid_utf8_does_not_abort_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"good\n\xff\xfe\nother\n").unwrap();

        let mut dict = Dictionary::new();
        dict.load_files(&[file.path()]);

        assert!(dict.is_common("good"));
        assert!(dict.is_common("other"));
    }
}
