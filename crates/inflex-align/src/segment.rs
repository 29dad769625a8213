// Prefix / stem / suffix segmentation of an alignment

use inflex_core::symbol::{self, Symbol};

use crate::Alignment;

/// One side of a segmented alignment, still in aligned coordinates.
///
/// The parts may contain gaps; concatenating them and removing gaps gives
/// back the original word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    pub prefix: Vec<Symbol>,
    pub stem: Vec<Symbol>,
    pub suffix: Vec<Symbol>,
}

impl Segments {
    fn cut(side: &[Symbol], stem_start: usize, stem_end: usize) -> Self {
        Self {
            prefix: side[..stem_start].to_vec(),
            stem: side[stem_start..stem_end].to_vec(),
            suffix: side[stem_end..].to_vec(),
        }
    }

    /// The reconstructed word, gaps removed.
    pub fn word(&self) -> String {
        let mut word = symbol::to_word(&self.prefix);
        word.push_str(&symbol::to_word(&self.stem));
        word.push_str(&symbol::to_word(&self.suffix));
        word
    }
}

/// Lemma and form, each split at the same aligned positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentedPair {
    pub lemma: Segments,
    pub form: Segments,
}

impl SegmentedPair {
    /// Split an alignment into prefix, stem and suffix.
    ///
    /// The prefix boundary is the longer of the two leading gap runs, the
    /// suffix boundary the longer of the two trailing gap runs. Both
    /// boundaries are applied to both sides. When they overlap the suffix
    /// keeps its full run and the prefix is clipped, so an empty lemma or
    /// form puts all material in the suffix.
    pub fn split(alignment: &Alignment) -> Self {
        let len = alignment.len();
        let (upper, lower) = (alignment.upper(), alignment.lower());

        let trail = symbol::trailing_gaps(upper).max(symbol::trailing_gaps(lower));
        let stem_end = len.saturating_sub(trail);
        let lead = symbol::leading_gaps(upper)
            .max(symbol::leading_gaps(lower))
            .min(stem_end);

        Self {
            lemma: Segments::cut(upper, lead, stem_end),
            form: Segments::cut(lower, lead, stem_end),
        }
    }
}
