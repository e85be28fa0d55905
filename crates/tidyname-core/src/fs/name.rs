//! Stem/extension splitting and disambiguation suffixes.

use regex::Regex;

use crate::config::settings::NamingConfig;

/// Naming rules shared by the element normalizer and the collision resolver.
#[derive(Debug, Clone)]
pub struct NamingRules {
    bundle_extensions: Vec<String>,
    marker: String,
    max_attempts: usize,
    suffix: Regex,
}

impl NamingRules {
    pub fn new(bundle_extensions: Vec<String>, marker: &str, max_attempts: usize) -> Self {
        let suffix = Regex::new(&format!("(?s)^(.*){}([0-9]+)$", regex::escape(marker)))
            .expect("Invalid disambiguation regex");
        Self {
            bundle_extensions,
            marker: marker.to_string(),
            max_attempts,
            suffix,
        }
    }

    pub fn from_config(config: &NamingConfig) -> Self {
        Self::new(
            config.bundle_extensions.clone(),
            &config.disambiguation_marker,
            config.max_collision_attempts,
        )
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns `true` if `extension` (with its dot) marks a bundle directory.
    pub fn is_bundle_extension(&self, extension: &str) -> bool {
        self.bundle_extensions.iter().any(|b| b == extension)
    }

    /// Splits a base name into `(stem, extension)`.
    ///
    /// Directories keep their whole name as the stem unless the extension
    /// is a bundle extension such as `.app`.
    pub fn split<'a>(&self, basename: &'a str, is_dir: bool) -> (&'a str, &'a str) {
        let (stem, extension) = split_extension(basename);
        if is_dir && !self.is_bundle_extension(extension) {
            (basename, "")
        } else {
            (stem, extension)
        }
    }

    /// Splits a trailing `marker + counter` off `stem`.
    ///
    /// Returns the base and the counter, or `(stem, None)` when there is no
    /// suffix (or the counter does not fit in a `u64`).
    pub fn parse_disambiguation<'a>(&self, stem: &'a str) -> (&'a str, Option<u64>) {
        self.suffix
            .captures(stem)
            .and_then(|caps| {
                let base = caps.get(1)?.as_str();
                let counter = caps.get(2)?.as_str().parse::<u64>().ok()?;
                Some((base, Some(counter)))
            })
            .unwrap_or((stem, None))
    }

    /// The next candidate stem: an existing counter is incremented, otherwise
    /// `marker + 1` is appended.
    pub fn next_candidate(&self, stem: &str) -> String {
        let (base, counter) = self.parse_disambiguation(stem);
        let next = counter.map_or(1, |n| n.saturating_add(1));
        format!("{base}{}{next}", self.marker)
    }
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}

/// Splits at the last `.`, ignoring dots in the leading run.
///
/// `a.tar.gz` gives `("a.tar", ".gz")`, `.bashrc` gives `(".bashrc", "")`
/// and `a.` gives `("a", ".")`.
pub fn split_extension(basename: &str) -> (&str, &str) {
    let leading = basename.len() - basename.trim_start_matches('.').len();
    match basename.rfind('.') {
        Some(idx) if idx >= leading => basename.split_at(idx),
        _ => (basename, ""),
    }
}
