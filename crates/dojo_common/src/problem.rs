//! The posed question and the result of checking an answer

use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// The currently posed question. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub mode: Mode,
    pub operands: Vec<i64>,
    pub expected_answer: i64,
    pub started_at: Instant,
}

impl Problem {
    /// Build a problem, computing the answer from the operands.
    ///
    /// Addition sums every operand; subtraction takes the first minus the second.
    pub fn new(mode: Mode, operands: Vec<i64>) -> Self {
        let expected_answer = match mode {
            Mode::Addition => operands.iter().sum(),
            Mode::Subtraction => match operands.as_slice() {
                [a, b, ..] => a - b,
                [a] => *a,
                [] => 0,
            },
        };
        Self {
            mode,
            operands,
            expected_answer,
            started_at: Instant::now(),
        }
    }

    /// "12 + 34 + 56" or "80 - 25"
    pub fn equation(&self) -> String {
        let glyph = format!(" {} ", self.mode.operator());
        match self.mode {
            Mode::Addition => self
                .operands
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(&glyph),
            Mode::Subtraction => self
                .operands
                .iter()
                .take(2)
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(&glyph),
        }
    }

    /// Characters in the answer's decimal form
    pub fn answer_len(&self) -> usize {
        self.expected_answer.to_string().len()
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Outcome of `check_answer`. The expected value is always reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub expected: i64,
}
