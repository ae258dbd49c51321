//! Course difficulty level.
//!
//! # Responsibility
//! - Define the closed set of levels a course can carry.
//! - Map external tokens (Spanish source data, English aliases) onto variants.
//!
//! # Invariants
//! - Token matching is case-insensitive and ignores surrounding whitespace.
//! - Every variant has at least one token in `LEVEL_TOKENS`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Difficulty tier of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// External token table, lower-case.
const LEVEL_TOKENS: &[(&str, Level)] = &[
    ("principiante", Level::Beginner),
    ("intermedio", Level::Intermediate),
    ("avanzado", Level::Advanced),
    ("beginner", Level::Beginner),
    ("intermediate", Level::Intermediate),
    ("advanced", Level::Advanced),
];

impl Level {
    /// All variants in declaration order.
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Parses an external token into a level.
    ///
    /// # Errors
    /// - Returns `LevelParseError` when no table entry matches.
    pub fn parse_token(token: &str) -> Result<Self, LevelParseError> {
        let normalized = token.trim().to_lowercase();
        LEVEL_TOKENS
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, level)| *level)
            .ok_or_else(|| LevelParseError(token.trim().to_string()))
    }

    /// Upper-case display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

/// Token did not match any known level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelParseError(pub String);

impl Display for LevelParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown level `{}`; expected principiante|intermedio|avanzado",
            self.0
        )
    }
}

impl Error for LevelParseError {}
