//! The individual string transformations of the standardization pipeline.
//!
//! Each function is a pure `&str -> String` mapping. They are composed, in a
//! fixed order, by [`super::Normalizer`].

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::settings::CharClass;
use crate::normalize::void_words::VoidWordSet;

/// Folds one separator character into underscores.
///
/// Three ordered rewrites: an underscore run followed by separators (and
/// optionally more underscores) swallows the separators; separators directly
/// before an underscore run are dropped; any remaining separator run becomes
/// a single `_`.
struct SeparatorFold {
    after_underscore: Regex,
    before_underscore: Regex,
    run: Regex,
}

impl SeparatorFold {
    fn new(separator: char) -> Self {
        let sep = regex::escape(&separator.to_string());
        Self {
            after_underscore: Regex::new(&format!("(_+){sep}+(_*)"))
                .expect("Invalid separator regex"),
            before_underscore: Regex::new(&format!("{sep}+(_+)")).expect("Invalid separator regex"),
            run: Regex::new(&format!("{sep}+")).expect("Invalid separator regex"),
        }
    }

    fn apply(&self, text: &str) -> String {
        let text = self.after_underscore.replace_all(text, "${1}${2}");
        let text = self.before_underscore.replace_all(&text, "${1}");
        self.run.replace_all(&text, "_").into_owned()
    }
}

static SPACE_FOLD: LazyLock<SeparatorFold> = LazyLock::new(|| SeparatorFold::new(' '));
static MINUS_FOLD: LazyLock<SeparatorFold> = LazyLock::new(|| SeparatorFold::new('-'));
static PERIOD_FOLD: LazyLock<SeparatorFold> = LazyLock::new(|| SeparatorFold::new('.'));

/// Removes filler words; see [`VoidWordSet::remove_from`].
pub fn remove_void_words(text: &str, void_words: &VoidWordSet) -> String {
    void_words.remove_from(text)
}

/// Decomposes (NFKD) and keeps only ASCII code points.
///
/// Accents become their base letter; characters without an ASCII base are
/// dropped rather than substituted.
pub fn remove_diacritics(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Deletes every character outside the `printable` classes.
pub fn remove_non_printable(text: &str, printable: &[CharClass]) -> String {
    text.chars()
        .filter(|&c| printable.iter().any(|class| class.contains(c)))
        .collect()
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn remove_multiple_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Folds spaces into underscores, letting adjacent underscores absorb them.
pub fn substitute_underscore_to_space(text: &str) -> String {
    SPACE_FOLD.apply(text)
}

/// Folds hyphens into underscores, letting adjacent underscores absorb them.
pub fn substitute_underscore_to_minus(text: &str) -> String {
    MINUS_FOLD.apply(text)
}

/// Folds periods into underscores, letting adjacent underscores absorb them.
pub fn substitute_underscore_to_periods(text: &str) -> String {
    PERIOD_FOLD.apply(text)
}

pub fn strip_underscores(text: &str) -> String {
    text.trim_matches('_').to_string()
}
