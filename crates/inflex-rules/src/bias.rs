// Prefixing vs. suffixing detection

use inflex_align::hamming::hamming_align;
use inflex_core::Record;
use inflex_core::symbol::{self, reverse_word};

/// Which word edge a training set mostly inflects at.
///
/// Rules are learned at the word end; a prefixing language is handled by
/// reversing every word so that its prefixes become suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Suffixing,
    Prefixing,
}

impl Direction {
    /// Put a word into rule-learning orientation (or back out of it).
    pub fn orient(self, word: &str) -> String {
        match self {
            Direction::Suffixing => word.to_string(),
            Direction::Prefixing => reverse_word(word),
        }
    }

    pub fn is_prefixing(self) -> bool {
        self == Direction::Prefixing
    }
}

/// Aggregate leading and trailing gap counts over a training set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffixBias {
    pub prefix: usize,
    pub suffix: usize,
}

impl AffixBias {
    /// Add one training pair, aligned with the Hamming heuristic.
    ///
    /// Pairs whose alignment contains a space or a hyphen (multiword or
    /// hyphenated entries) are ignored.
    pub fn observe(&mut self, lemma: &str, form: &str) {
        let al = hamming_align(lemma, form);
        if al.contains_char(' ') || al.contains_char('-') {
            return;
        }
        self.prefix += symbol::leading_gaps(al.upper()) + symbol::leading_gaps(al.lower());
        self.suffix += symbol::trailing_gaps(al.upper()) + symbol::trailing_gaps(al.lower());
    }

    /// Prefixing only when strictly more material changes at the start.
    pub fn direction(&self) -> Direction {
        if self.prefix > self.suffix {
            Direction::Prefixing
        } else {
            Direction::Suffixing
        }
    }
}

/// Decide the direction of a whole training set.
pub fn detect_direction<'a, I>(records: I) -> Direction
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut bias = AffixBias::default();
    for rec in records {
        bias.observe(&rec.lemma, &rec.form);
    }
    let direction = bias.direction();
    tracing::debug!(
        prefix_bias = bias.prefix,
        suffix_bias = bias.suffix,
        ?direction,
        "detected affix direction"
    );
    direction
}
