//! Wordle Engine
//!
//! Recommends five-letter Wordle guesses by maximizing the expected number of
//! candidate answers each guess eliminates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{FeedbackMask, LetterOutcome, Word};
//!
//! let guess = Word::new("tares").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let mask = FeedbackMask::compare(&guess, &answer);
//! assert_eq!(mask.count(LetterOutcome::Yellow), 3);
//! println!("{}", mask.to_emoji());
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod dictionary;

// Candidate filtering and guess ranking
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
