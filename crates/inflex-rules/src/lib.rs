//! Affix-rule induction for morphological inflection.
//!
//! Learns prefix- and suffix-change rules from `(lemma, form, msd)`
//! examples and applies the most specific matching rule to unseen lemmas.
//!
//! # Architecture
//!
//! - [`rule`] -- Rule type (input/output symbol patterns)
//! - [`extract`] -- Rule extraction from a segmented alignment
//! - [`table`] -- Per-MSD rule occurrence counts
//! - [`apply`] -- Best-rule selection and application
//! - [`bias`] -- Prefixing vs. suffixing detection
//! - [`model`] -- Training and prediction entry point
//! - [`score`] -- Form accuracy, edit distance and paradigm accuracy
//! - [`task`] -- Shared-task runners and per-quantity averages

pub mod apply;
pub mod bias;
pub mod extract;
pub mod model;
pub mod rule;
pub mod score;
pub mod table;
pub mod task;

pub use bias::Direction;
pub use model::{InflectionModel, LearnerOptions};
pub use rule::Rule;
pub use table::RuleTable;

use inflex_core::RecordError;

/// Error type for rule learning and evaluation.
#[derive(Debug, thiserror::Error)]
pub enum InflexError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("covered and uncovered streams differ in length: {covered} vs {uncovered}")]
    StreamLengthMismatch { covered: usize, uncovered: usize },
    #[error("line {line}: covered record ({covered}) does not match uncovered record ({uncovered})")]
    StreamRecordMismatch {
        line: usize,
        covered: String,
        uncovered: String,
    },
    #[error("no items to score")]
    NoData,
}
