//! Runtime configuration from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for the piece kind picker.
    pub seed: u32,
    /// Optional JSONL action journal.
    pub log_path: Option<String>,
    /// ANSI colors and screen clearing (still requires a terminal on stdout).
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            color: true,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `PIECE_STASH_SEED`: u32 seed (default: derived from the clock)
    /// - `PIECE_STASH_LOG_PATH`: journal path (unset or blank disables it)
    /// - `PIECE_STASH_NO_COLOR`: "1" or "true" disables colors
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("PIECE_STASH_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("PIECE_STASH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let no_color = lookup("PIECE_STASH_NO_COLOR")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            log_path,
            color: !no_color,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PIECE_STASH_SEED", "77"),
            ("PIECE_STASH_LOG_PATH", " /tmp/stash.jsonl "),
            ("PIECE_STASH_NO_COLOR", "TRUE"),
        ]));
        assert_eq!(cfg.seed, 77);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/stash.jsonl"));
        assert!(!cfg.color);
    }

    #[test]
    fn blank_log_path_disables_journal() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("PIECE_STASH_LOG_PATH", "   ")]));
        assert_eq!(cfg.log_path, None);
        assert!(cfg.color);
    }

    #[test]
    fn bad_seed_falls_back_to_clock() {
        // Only checks that parsing does not fail; the clock value is arbitrary.
        let cfg = AppConfig::from_lookup(lookup_from(&[("PIECE_STASH_SEED", "abc")]));
        assert!(cfg.log_path.is_none());
    }
}
