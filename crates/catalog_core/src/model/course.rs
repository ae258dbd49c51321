//! Course domain model.
//!
//! # Responsibility
//! - Define the immutable course record stored in the catalog.
//!
//! # Invariants
//! - `name` is non-blank and stored trimmed.
//! - Fields never change after construction; there are no setters.
//! - Two courses with the same fields are equal; duplicates are still
//!   separate catalog entries.

use crate::model::level::Level;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Date format used by the input file and by course display.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One published course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    name: String,
    published: NaiveDate,
    level: Level,
}

impl Course {
    /// Creates a course.
    ///
    /// # Errors
    /// - Returns `CourseValidationError::EmptyName` when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        published: NaiveDate,
        level: Level,
    ) -> Result<Self, CourseValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        let name = if trimmed.len() == name.len() {
            name
        } else {
            trimmed.to_string()
        };

        Ok(Self {
            name,
            published,
            level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn published(&self) -> NaiveDate {
        self.published
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

/// Unvalidated wire shape; deserialization goes through `Course::new`.
#[derive(Deserialize)]
struct CourseRecord {
    name: String,
    published: NaiveDate,
    level: Level,
}

impl TryFrom<CourseRecord> for Course {
    type Error = CourseValidationError;

    fn try_from(value: CourseRecord) -> Result<Self, Self::Error> {
        Self::new(value.name, value.published, value.level)
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<45} {:<10} {}",
            self.name,
            self.published.format(DATE_FORMAT).to_string(),
            self.level
        )
    }
}

/// Validation failure for course construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseValidationError {
    EmptyName,
}

impl Display for CourseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "course name must not be blank"),
        }
    }
}

impl Error for CourseValidationError {}
