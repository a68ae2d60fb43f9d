//! Interactive terminal interface

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
