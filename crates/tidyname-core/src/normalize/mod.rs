//! Name standardization.
//!
//! A [`Normalizer`] turns a stem into its canonical form by running an
//! ordered list of [`Stage`]s. The order is not interchangeable: periods and
//! hyphens must be folded into underscores before the non-printable stage
//! would delete them, and spaces are folded only after runs of whitespace
//! have been collapsed.
//!
//! ```
//! use tidyname_core::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(normalizer.standardize("Le Café - été 2014"), "Cafe_ete_2014");
//! ```

pub mod stages;
pub mod void_words;

use crate::config::settings::{CharClass, NormalizeConfig, DEFAULT_PRINTABLE};

pub use stages::{
    remove_diacritics, remove_multiple_spaces, remove_non_printable, remove_void_words,
    strip_underscores, substitute_underscore_to_minus, substitute_underscore_to_periods,
    substitute_underscore_to_space,
};
pub use void_words::VoidWordSet;

/// Upper bound on whole-pipeline passes in [`Normalizer::standardize`].
const MAX_PASSES: usize = 8;

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RemoveVoidWords,
    RemoveDiacritics,
    FoldPeriods,
    FoldHyphens,
    RemoveNonPrintable,
    CollapseSpaces,
    FoldSpaces,
    StripUnderscores,
}

/// The canonical stage order.
pub const PIPELINE: [Stage; 8] = [
    Stage::RemoveVoidWords,
    Stage::RemoveDiacritics,
    Stage::FoldPeriods,
    Stage::FoldHyphens,
    Stage::RemoveNonPrintable,
    Stage::CollapseSpaces,
    Stage::FoldSpaces,
    Stage::StripUnderscores,
];

/// Immutable standardization settings plus the stage list.
///
/// Build one per run with [`Normalizer::from_config`] and share it by
/// reference; [`Normalizer::standardize`] never fails.
#[derive(Debug, Clone)]
pub struct Normalizer {
    void_words: VoidWordSet,
    printable: Vec<CharClass>,
    stages: Vec<Stage>,
}

impl Normalizer {
    pub fn new(void_words: VoidWordSet, printable: Vec<CharClass>) -> Self {
        Self {
            void_words,
            printable,
            stages: PIPELINE.to_vec(),
        }
    }

    pub fn from_config(config: &NormalizeConfig) -> Self {
        Self::new(
            VoidWordSet::new(&config.void_words),
            config.printable.clone(),
        )
    }

    /// Replaces the stage list. Mostly useful for tests and experiments.
    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Applies a single stage.
    pub fn apply(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::RemoveVoidWords => remove_void_words(text, &self.void_words),
            Stage::RemoveDiacritics => remove_diacritics(text),
            Stage::FoldPeriods => substitute_underscore_to_periods(text),
            Stage::FoldHyphens => substitute_underscore_to_minus(text),
            Stage::RemoveNonPrintable => remove_non_printable(text, &self.printable),
            Stage::CollapseSpaces => remove_multiple_spaces(text),
            Stage::FoldSpaces => substitute_underscore_to_space(text),
            Stage::StripUnderscores => strip_underscores(text),
        }
    }

    /// Runs every stage once, in order.
    pub fn run_pipeline(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |acc, &stage| self.apply(stage, &acc))
    }

    /// Returns the standardized form of `stem`.
    ///
    /// The pipeline is re-run until its output stops changing, so a result
    /// that is itself a filler word (`le_` gives `le`) is removed too and
    /// `standardize(standardize(x)) == standardize(x)` holds. An empty
    /// result means nothing printable survived.
    pub fn standardize(&self, stem: &str) -> String {
        let mut current = self.run_pipeline(stem);
        for _ in 1..MAX_PASSES {
            let next = self.run_pipeline(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(VoidWordSet::default(), DEFAULT_PRINTABLE.to_vec())
    }
}
