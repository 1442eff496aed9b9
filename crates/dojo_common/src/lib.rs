//! Dojo Common - Problem generation and progression engine for Mental Dojo
//!
//! Everything here is presentation-free: the engine is a plain state object
//! driven by explicit calls (select mode, generate, check, query progress).
//! Any front end (terminal, desktop, web) owns rendering and timing.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod levels;
pub mod mode;
pub mod problem;
pub mod stats;

pub use config::DojoConfig;
pub use engine::{next_phase, AnswerRecord, Phase, ProblemEngine};
pub use error::{AnswerError, DojoError};
pub use levels::{Curriculum, LevelSpec};
pub use mode::Mode;
pub use problem::{Problem, Verdict};
pub use stats::SessionStats;
