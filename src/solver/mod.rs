//! Solving engine
//!
//! Candidate bookkeeping, expected-elimination ranking and the engine that ties
//! them together for one game at a time.

pub mod candidates;
mod engine;
pub mod ranker;

pub use candidates::CandidateStore;
pub use engine::{DEFAULT_OPENING, Engine, EngineError, GameState, GuessRecommendation};
pub use ranker::{BestTracker, GuessRanker, MaskDistribution, Ranking, expected_elimination};
