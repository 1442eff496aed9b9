//! Curriculum tables
//!
//! Each mode has a fixed, ordered list of levels. Early addition levels
//! restrict the digit pool so specific carry patterns get drilled before
//! mixed practice.

use crate::mode::Mode;
use serde::{Deserialize, Serialize};

/// One curriculum step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Correct answers needed to advance
    pub problem_count: u32,

    /// Operand width in digits
    pub digit_count: u32,

    /// Allowed digits, if restricted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digit_pool: Option<Vec<u8>>,

    pub label: String,
}

impl LevelSpec {
    pub fn new(problem_count: u32, digit_count: u32, label: &str) -> Self {
        Self {
            problem_count,
            digit_count,
            digit_pool: None,
            label: label.to_string(),
        }
    }

    pub fn with_pool(mut self, pool: impl IntoIterator<Item = u8>) -> Self {
        self.digit_pool = Some(pool.into_iter().collect());
        self
    }

    /// Human-readable pool, e.g. "0-5" or "6,7,9"
    pub fn pool_display(&self) -> String {
        match &self.digit_pool {
            None => "any".to_string(),
            Some(pool) if pool.is_empty() => "any".to_string(),
            Some(pool) => {
                let contiguous = pool.windows(2).all(|w| w[1] == w[0] + 1);
                if contiguous && pool.len() > 2 {
                    format!("{}-{}", pool[0], pool[pool.len() - 1])
                } else {
                    pool.iter()
                        .map(|d| d.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                }
            }
        }
    }
}

/// Level sequences for both modes. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    pub addition: Vec<LevelSpec>,
    pub subtraction: Vec<LevelSpec>,
}

impl Curriculum {
    /// The standard Mental Dojo curriculum
    pub fn standard() -> Self {
        let addition = vec![
            // Pure speed, no carries
            LevelSpec::new(20, 2, "L1: 2D SPEED (0-5)").with_pool(0..=5),
            // Heavy carry practice
            LevelSpec::new(20, 2, "L2: 2D CARRY (6-9)").with_pool(6..=9),
            LevelSpec::new(20, 2, "L3: 2D MIXED").with_pool(0..=9),
            LevelSpec::new(20, 3, "L4: 3D MASTER").with_pool(0..=9),
            LevelSpec::new(20, 4, "L5: 4D GRANDMASTER").with_pool(0..=9),
        ];

        let subtraction = vec![
            LevelSpec::new(30, 2, "L1: 2D SUBTRACTION"),
            LevelSpec::new(30, 3, "L2: 3D SUBTRACTION"),
            LevelSpec::new(30, 4, "L3: 4D SUBTRACTION"),
        ];

        Self {
            addition,
            subtraction,
        }
    }

    pub fn levels(&self, mode: Mode) -> &[LevelSpec] {
        match mode {
            Mode::Addition => &self.addition,
            Mode::Subtraction => &self.subtraction,
        }
    }

    /// Correct answers needed to clear every level of a mode
    pub fn total_problems(&self, mode: Mode) -> u32 {
        self.levels(mode).iter().map(|l| l.problem_count).sum()
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Self::standard()
    }
}
