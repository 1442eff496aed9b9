//! Drill mode selection

use crate::error::DojoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which operation the drill practices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Addition,
    Subtraction,
}

impl Mode {
    /// Operator glyph used when rendering equations
    pub fn operator(&self) -> char {
        match self {
            Mode::Addition => '+',
            Mode::Subtraction => '-',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Addition => "ADDITION",
            Mode::Subtraction => "SUBTRACTION",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Addition => "addition",
            Mode::Subtraction => "subtraction",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DojoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "addition" | "+" => Ok(Mode::Addition),
            "sub" | "subtraction" | "-" => Ok(Mode::Subtraction),
            other => Err(DojoError::UnknownMode(other.to_string())),
        }
    }
}
