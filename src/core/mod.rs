//! Core domain types for the guessing game
//!
//! Words, per-letter outcomes and feedback masks. Everything here is pure and
//! free of I/O.

mod mask;
mod word;

pub use mask::{FeedbackMask, LetterOutcome, MASK_COUNT, MaskParseError};
pub use word::{LetterCounts, WORD_SIZE, Word, WordError};
