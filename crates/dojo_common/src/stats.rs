//! Session summary computed from the engine's answer history

use crate::engine::AnswerRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub answered: usize,
    pub correct: usize,
    pub wrong: usize,
    pub best_streak: u32,
    pub mean_correct_time: Option<Duration>,
    pub fastest_correct_time: Option<Duration>,
}

impl SessionStats {
    pub fn from_history(history: &[AnswerRecord]) -> Self {
        let correct_times: Vec<Duration> = history
            .iter()
            .filter(|r| r.correct)
            .map(|r| r.response_time)
            .collect();

        let correct = correct_times.len();
        let mean_correct_time = if correct > 0 {
            Some(correct_times.iter().sum::<Duration>() / correct as u32)
        } else {
            None
        };

        Self {
            answered: history.len(),
            correct,
            wrong: history.len() - correct,
            best_streak: history.iter().map(|r| r.streak).max().unwrap_or(0),
            mean_correct_time,
            fastest_correct_time: correct_times.iter().min().copied(),
        }
    }

    /// Share of correct answers, 0-100
    pub fn accuracy_percent(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.answered as f64
    }

    pub fn is_empty(&self) -> bool {
        self.answered == 0
    }
}
