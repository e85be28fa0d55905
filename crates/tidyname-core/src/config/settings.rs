//! Run configuration loaded from an optional TOML file.
//!
//! Every field has a default, and the defaults reproduce the built-in
//! French table, so tidyname works without a config file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{CoreError, CoreResult};

/// Top-level configuration.
///
/// Built once before any traversal starts and then only read.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub walk: WalkConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Unicode character classes the non-printable stage keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// Uppercase letter (Lu).
    Uppercase,
    /// Lowercase letter (Ll).
    Lowercase,
    /// Decimal digit (Nd).
    Digit,
    /// Space separator (Zs).
    Space,
    /// Connector punctuation (Pc), e.g. `_`.
    Connector,
}

impl CharClass {
    /// Returns `true` if the general category of `c` is this class.
    pub fn contains(self, c: char) -> bool {
        let category = get_general_category(c);
        match self {
            CharClass::Uppercase => category == GeneralCategory::UppercaseLetter,
            CharClass::Lowercase => category == GeneralCategory::LowercaseLetter,
            CharClass::Digit => category == GeneralCategory::DecimalNumber,
            CharClass::Space => category == GeneralCategory::SpaceSeparator,
            CharClass::Connector => category == GeneralCategory::ConnectorPunctuation,
        }
    }
}

/// Text pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Filler words removed from names, matched case-insensitively.
    #[serde(default = "default_void_words")]
    pub void_words: Vec<String>,
    /// Character classes that survive the non-printable stage.
    #[serde(default = "default_printable")]
    pub printable: Vec<CharClass>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            void_words: default_void_words(),
            printable: default_printable(),
        }
    }
}

/// How names are split and disambiguated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Directory extensions that stay split off like a file extension (e.g. `.app`).
    #[serde(default = "default_bundle_extensions")]
    pub bundle_extensions: Vec<String>,
    #[serde(default = "default_disambiguation_marker")]
    pub disambiguation_marker: String,
    #[serde(default = "default_max_collision_attempts")]
    pub max_collision_attempts: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            bundle_extensions: default_bundle_extensions(),
            disambiguation_marker: default_disambiguation_marker(),
            max_collision_attempts: default_max_collision_attempts(),
        }
    }
}

/// Tree traversal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Leave dot-prefixed children alone. Roots are always processed.
    #[serde(default = "default_true")]
    pub skip_hidden: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { skip_hidden: true }
    }
}

/// The built-in French filler words.
pub const FRENCH_VOID_WORDS: &[&str] = &[
    "l'", "le", "la", "les", "d'", "de", "des", "un", "une", "s'", "si", "à", "n'", "en", "sur",
];

/// Letters, digits, spaces and underscores: Lu, Ll, Nd, Zs, Pc.
pub const DEFAULT_PRINTABLE: &[CharClass] = &[
    CharClass::Uppercase,
    CharClass::Lowercase,
    CharClass::Digit,
    CharClass::Space,
    CharClass::Connector,
];

fn default_void_words() -> Vec<String> {
    FRENCH_VOID_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_printable() -> Vec<CharClass> {
    DEFAULT_PRINTABLE.to_vec()
}

fn default_bundle_extensions() -> Vec<String> {
    vec![".app".to_string()]
}

fn default_disambiguation_marker() -> String {
    "_DISAMB_".to_string()
}

fn default_max_collision_attempts() -> usize {
    10_000
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_normalize() {
        let config = Config::default();

        assert_eq!(config.normalize.void_words.len(), 15);
        assert!(config.normalize.void_words.iter().any(|w| w == "n'"));
        assert!(config.normalize.void_words.iter().any(|w| w == "à"));
        assert_eq!(config.normalize.printable.len(), 5);
    }

    #[test]
    fn default_config_naming() {
        let config = Config::default();

        assert_eq!(config.naming.bundle_extensions, vec![".app".to_string()]);
        assert_eq!(config.naming.disambiguation_marker, "_DISAMB_");
        assert_eq!(config.naming.max_collision_attempts, 10_000);
    }

    #[test]
    fn default_config_walk() {
        assert!(Config::default().walk.skip_hidden);
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tidyname.toml");
        fs::write(
            &path,
            r#"
[normalize]
void_words = ["the", "a", "of"]
printable = ["lowercase", "digit", "space"]

[naming]
bundle_extensions = [".app", ".bundle"]
disambiguation_marker = "_v"
max_collision_attempts = 5

[walk]
skip_hidden = false
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.normalize.void_words, vec!["the", "a", "of"]);
        assert_eq!(
            config.normalize.printable,
            vec![CharClass::Lowercase, CharClass::Digit, CharClass::Space]
        );
        assert_eq!(config.naming.bundle_extensions, vec![".app", ".bundle"]);
        assert_eq!(config.naming.disambiguation_marker, "_v");
        assert_eq!(config.naming.max_collision_attempts, 5);
        assert!(!config.walk.skip_hidden);
    }

    #[test]
    fn load_partial_toml_keeps_defaults() {
        let config = Config::from_toml("[naming]\nmax_collision_attempts = 3\n").unwrap();

        assert_eq!(config.naming.max_collision_attempts, 3);
        assert_eq!(config.naming.disambiguation_marker, "_DISAMB_");
        assert_eq!(config.normalize.void_words.len(), 15);
        assert!(config.walk.skip_hidden);
    }

    #[test]
    fn load_empty_toml_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.normalize.printable.len(), 5);
    }

    #[test]
    fn load_missing_file_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_malformed_toml_returns_config_parse() {
        let result = Config::from_toml("[naming\nmarker = ");
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn unknown_char_class_is_rejected() {
        let result = Config::from_toml("[normalize]\nprintable = [\"emoji\"]\n");
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn char_class_membership() {
        assert!(CharClass::Uppercase.contains('A'));
        assert!(!CharClass::Uppercase.contains('a'));
        assert!(CharClass::Lowercase.contains('z'));
        assert!(CharClass::Digit.contains('7'));
        assert!(!CharClass::Digit.contains('x'));
        assert!(CharClass::Space.contains(' '));
        assert!(!CharClass::Space.contains('\t'));
        assert!(CharClass::Connector.contains('_'));
        assert!(!CharClass::Connector.contains('-'));
    }

    #[test]
    fn char_class_follows_general_category() {
        // Arabic-Indic three is Nd, Roman numeral nine is Nl, ordinal a is Lo.
        assert!(CharClass::Digit.contains('\u{0663}'));
        assert!(!CharClass::Digit.contains('\u{2168}'));
        assert!(!CharClass::Uppercase.contains('\u{2168}'));
        assert!(!CharClass::Lowercase.contains('\u{00AA}'));
        assert!(CharClass::Space.contains('\u{3000}'));
        assert!(CharClass::Connector.contains('\u{203F}'));
        assert!(CharClass::Uppercase.contains('\u{00C9}'));
    }
}
