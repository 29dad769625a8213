//! Character alignment engine.
//!
//! Aligns a lemma with an inflected form so that shared material lines up
//! and the differing material shows up as gaps at the edges.
//!
//! # Architecture
//!
//! - [`hamming`] -- Shift-and-pad heuristic alignment scored by Hamming distance
//! - [`edit`] -- Exact weighted edit-distance alignment (suffix-indexed DP table)
//! - [`segment`] -- Prefix / stem / suffix split of an alignment
//! - [`distance`] -- Unit-cost Levenshtein distance for scoring

pub mod distance;
pub mod edit;
pub mod hamming;
pub mod segment;

pub use distance::distance;
pub use edit::{EditAligner, EditCosts};
pub use hamming::HammingAligner;
pub use segment::{SegmentedPair, Segments};

use inflex_core::symbol::{self, Symbol};

/// Two equal-length symbol sequences in position-by-position correspondence.
///
/// `upper` is the source word (lemma), `lower` the target word (form).
/// Removing gaps from either side yields the original word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    upper: Vec<Symbol>,
    lower: Vec<Symbol>,
}

impl Alignment {
    /// Build an alignment from two sides of equal length.
    ///
    /// # Panics
    ///
    /// Panics if the sides differ in length.
    pub fn new(upper: Vec<Symbol>, lower: Vec<Symbol>) -> Self {
        assert_eq!(upper.len(), lower.len(), "alignment sides must have equal length");
        Self { upper, lower }
    }

    pub fn upper(&self) -> &[Symbol] {
        &self.upper
    }

    pub fn lower(&self) -> &[Symbol] {
        &self.lower
    }

    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Iterate over aligned `(upper, lower)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (Symbol, Symbol)> + '_ {
        self.upper.iter().copied().zip(self.lower.iter().copied())
    }

    /// The upper word with gaps removed.
    pub fn upper_word(&self) -> String {
        symbol::to_word(&self.upper)
    }

    /// The lower word with gaps removed.
    pub fn lower_word(&self) -> String {
        symbol::to_word(&self.lower)
    }

    /// Whether either side contains the given literal character.
    pub fn contains_char(&self, c: char) -> bool {
        self.pairs()
            .any(|(u, l)| u == Symbol::Char(c) || l == Symbol::Char(c))
    }

    /// Printable two-line rendering, gaps shown as `_`.
    pub fn render(&self) -> (String, String) {
        (symbol::render(&self.upper), symbol::render(&self.lower))
    }
}

/// Trait for alignment strategies.
pub trait Aligner {
    /// Align `source` (upper side) with `target` (lower side).
    fn align(&self, source: &str, target: &str) -> Alignment;
}
