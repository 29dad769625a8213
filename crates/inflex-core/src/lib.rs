//! Shared vocabulary for the inflex workspace.
//!
//! - [`symbol`] -- Alignment symbols (characters, gap, word-boundary markers)
//! - [`record`] -- `lemma \t form \t msd` corpus records and their line codec

pub mod record;
pub mod symbol;

pub use record::{Record, RecordError};
pub use symbol::Symbol;
