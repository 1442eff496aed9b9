//! Problem engine - level/streak state machine and problem generation
//!
//! State machine:
//!
//! ```text
//! set_mode           -> Curriculum, level 0
//! level goal reached -> Curriculum, level + 1
//! past last level    -> Endless (only set_mode leaves it)
//! ```
//!
//! The phase change is applied by `next_phase`, called once per
//! `generate_new_problem` and once per level advance in `check_answer`.

use crate::error::parse_answer;
use crate::generator::{
    endless_addition_operands, endless_subtraction_operands, generate_number, ordered_pair,
};
use crate::levels::{Curriculum, LevelSpec};
use crate::mode::Mode;
use crate::problem::{Problem, Verdict};
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Progression phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Working through the fixed level table
    #[default]
    Curriculum,
    /// Unbounded random problems after the last level
    Endless,
}

impl Phase {
    pub fn number(&self) -> u8 {
        match self {
            Phase::Curriculum => 1,
            Phase::Endless => 2,
        }
    }
}

/// Phase transition: the curriculum ends once the level index runs past the table.
pub fn next_phase(phase: Phase, level_index: usize, level_count: usize) -> Phase {
    match phase {
        Phase::Curriculum if level_index >= level_count => Phase::Endless,
        other => other,
    }
}

/// One checked answer. Kept in memory for the session summary only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub mode: Mode,
    pub phase: Phase,
    pub level_index: usize,
    pub equation: String,
    pub expected: i64,
    pub input: String,
    pub correct: bool,
    /// Streak after this answer was scored
    pub streak: u32,
    pub response_time: Duration,
    pub answered_at: DateTime<Local>,
}

/// Owns all progression state and the current problem
#[derive(Debug, Clone)]
pub struct ProblemEngine {
    curriculum: Curriculum,
    mode: Mode,
    phase: Phase,
    level_index: usize,
    correct_in_level: u32,
    streak: u32,
    problem: Option<Problem>,
    history: Vec<AnswerRecord>,
    rng: StdRng,
}

impl ProblemEngine {
    /// Standard curriculum, entropy-seeded
    pub fn new() -> Self {
        Self::with_curriculum(Curriculum::standard(), StdRng::from_entropy())
    }

    /// Standard curriculum with a fixed seed (reproducible sessions)
    pub fn with_seed(seed: u64) -> Self {
        Self::with_curriculum(Curriculum::standard(), StdRng::seed_from_u64(seed))
    }

    pub fn with_curriculum(curriculum: Curriculum, rng: StdRng) -> Self {
        Self {
            curriculum,
            mode: Mode::default(),
            phase: Phase::default(),
            level_index: 0,
            correct_in_level: 0,
            streak: 0,
            problem: None,
            history: Vec::new(),
            rng,
        }
    }

    /// Select a mode, reset all progress and pose the first problem
    pub fn set_mode(&mut self, mode: Mode) {
        info!("Mode selected: {}", mode);
        self.mode = mode;
        self.level_index = 0;
        self.streak = 0;
        self.correct_in_level = 0;
        self.phase = Phase::Curriculum;
        self.generate_new_problem();
    }

    /// Replace the current problem according to mode, phase and level
    pub fn generate_new_problem(&mut self) {
        self.settle_phase();

        let operands = match self.phase {
            Phase::Curriculum => {
                let spec = &self.curriculum.levels(self.mode)[self.level_index];
                let digits = spec.digit_count;
                match self.mode {
                    Mode::Addition => {
                        let pool = spec.digit_pool.as_deref();
                        let a = generate_number(&mut self.rng, digits, pool);
                        let b = generate_number(&mut self.rng, digits, pool);
                        vec![a, b]
                    }
                    Mode::Subtraction => {
                        let a = generate_number(&mut self.rng, digits, None);
                        let b = generate_number(&mut self.rng, digits, None);
                        ordered_pair(a, b).to_vec()
                    }
                }
            }
            Phase::Endless => match self.mode {
                Mode::Addition => endless_addition_operands(&mut self.rng),
                Mode::Subtraction => endless_subtraction_operands(&mut self.rng),
            },
        };

        let problem = Problem::new(self.mode, operands);
        debug!(
            phase = self.phase.number(),
            level = self.level_index,
            "New problem: {} = {}",
            problem.equation(),
            problem.expected_answer
        );
        self.problem = Some(problem);
    }

    /// Score a typed answer. Unparseable input counts as wrong.
    ///
    /// Does not pose the next problem; the caller decides when to.
    pub fn check_answer(&mut self, raw_input: &str) -> Verdict {
        let expected = self.expected_answer();
        let correct = match parse_answer(raw_input) {
            Ok(value) => value == expected,
            Err(e) => {
                debug!("Answer {:?} rejected: {}", raw_input, e);
                false
            }
        };

        let scored_phase = self.phase;
        let scored_level = self.level_index;

        if correct {
            self.streak += 1;
            if self.phase == Phase::Curriculum {
                self.correct_in_level += 1;
                self.advance_if_cleared();
            }
        } else {
            self.streak = 0;
        }

        debug!(correct, streak = self.streak, "Answer {:?} for {}", raw_input, expected);
        self.record(scored_phase, scored_level, raw_input, expected, correct);

        Verdict { correct, expected }
    }

    /// "LABEL | 7/20" in the curriculum, "PHASE 2 | GOD MODE | STREAK: n" after it
    pub fn progress_text(&self) -> String {
        let phase = next_phase(self.phase, self.level_index, self.levels().len());
        match (phase, self.current_level()) {
            (Phase::Curriculum, Some(level)) => format!(
                "{} | {}/{}",
                level.label, self.correct_in_level, level.problem_count
            ),
            _ => format!("PHASE 2 | GOD MODE | STREAK: {}", self.streak),
        }
    }

    fn advance_if_cleared(&mut self) {
        let goal = match self.current_level() {
            Some(level) => level.problem_count,
            None => return,
        };
        if self.correct_in_level < goal {
            return;
        }

        self.level_index += 1;
        self.correct_in_level = 0;
        match self.current_level() {
            Some(level) => info!("Level up: {}", level.label),
            None => debug!("Curriculum cleared for {}", self.mode),
        }
        self.settle_phase();
    }

    fn settle_phase(&mut self) {
        let next = next_phase(self.phase, self.level_index, self.levels().len());
        if next != self.phase {
            info!("Entering endless mode ({}), streak {}", self.mode, self.streak);
            self.phase = next;
        }
    }

    fn record(&mut self, phase: Phase, level_index: usize, input: &str, expected: i64, correct: bool) {
        let (equation, response_time) = self
            .problem
            .as_ref()
            .map(|p| (p.equation(), p.elapsed()))
            .unwrap_or_default();

        self.history.push(AnswerRecord {
            mode: self.mode,
            phase,
            level_index,
            equation,
            expected,
            input: input.to_string(),
            correct,
            streak: self.streak,
            response_time,
            answered_at: Local::now(),
        });
    }

    fn levels(&self) -> &[LevelSpec] {
        self.curriculum.levels(self.mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn correct_in_level(&self) -> u32 {
        self.correct_in_level
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    /// Answer to the current problem, 0 before any problem exists
    pub fn expected_answer(&self) -> i64 {
        self.problem.as_ref().map_or(0, |p| p.expected_answer)
    }

    /// Active level, `None` once the curriculum is exhausted
    pub fn current_level(&self) -> Option<&LevelSpec> {
        if self.phase == Phase::Endless {
            return None;
        }
        self.levels().get(self.level_index)
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for ProblemEngine {
    fn default() -> Self {
        Self::new()
    }
}
