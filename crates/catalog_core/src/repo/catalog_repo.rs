//! In-memory course catalog grouped by category.
//!
//! # Responsibility
//! - Own the category -> courses mapping and its mutation rules.
//! - Answer count/lookup/oldest queries and produce the text rendering.
//!
//! # Invariants
//! - Keys are stored upper-cased; lookups upper-case their key too.
//! - Keys iterate in ascending lexicographic order (`BTreeMap`).
//! - Courses keep insertion order within a category.
//! - Deletion removes every match in one pass and keeps the (possibly
//!   empty) category entry.

use crate::model::course::Course;
use crate::model::level::Level;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter, Write};

/// Returned by [`Catalog::count_in`] when the category does not exist.
pub const CATEGORY_NOT_FOUND: i64 = -1;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Rough per-line width used to pre-size the rendering buffer.
const RENDER_LINE_HINT: usize = 72;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog query/mutation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Holds the normalized (upper-case) category name.
    CategoryNotFound(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryNotFound(category) => write!(f, "category not found: {category}"),
        }
    }
}

impl Error for CatalogError {}

/// Courses grouped by upper-case category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<Course>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `course` to `category`, creating the category when missing.
    pub fn add_course(&mut self, category: &str, course: Course) {
        self.categories
            .entry(normalize_category(category))
            .or_default()
            .push(course);
    }

    /// Number of courses in `category`, or [`CATEGORY_NOT_FOUND`].
    ///
    /// An existing category emptied by deletion reports `0`.
    pub fn count_in(&self, category: &str) -> i64 {
        self.courses_in(category)
            .map_or(CATEGORY_NOT_FOUND, |courses| courses.len() as i64)
    }

    /// Courses of `category` in insertion order.
    pub fn courses_in(&self, category: &str) -> Option<&[Course]> {
        self.categories
            .get(&normalize_category(category))
            .map(Vec::as_slice)
    }

    /// Returns a new ascending set with every category name.
    pub fn categories(&self) -> BTreeSet<String> {
        self.categories.keys().cloned().collect()
    }

    /// Removes every course of `level` from `category`.
    ///
    /// Returns the removed names in ascending order; equal names collapse.
    ///
    /// # Errors
    /// - Returns `CatalogError::CategoryNotFound` when `category` is absent.
    pub fn delete_by_level(
        &mut self,
        category: &str,
        level: Level,
    ) -> CatalogResult<BTreeSet<String>> {
        let key = normalize_category(category);
        let courses = self
            .categories
            .get_mut(&key)
            .ok_or(CatalogError::CategoryNotFound(key))?;

        let mut removed = BTreeSet::new();
        courses.retain(|course| {
            if course.level() == level {
                removed.insert(course.name().to_string());
                false
            } else {
                true
            }
        });

        Ok(removed)
    }

    /// Course with the earliest publication date, or `None` when empty.
    ///
    /// Ties resolve to the first course in category order, then insertion
    /// order.
    pub fn oldest_course(&self) -> Option<&Course> {
        self.categories
            .values()
            .flatten()
            .min_by_key(|course| course.published())
    }

    /// Multi-line rendering: `CATEGORY (count)` then one line per course.
    pub fn render(&self) -> String {
        let line_count = self.categories.len() + self.total_courses();
        let mut out = String::with_capacity(line_count * RENDER_LINE_HINT);
        for (category, courses) in &self.categories {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{category} ({})", courses.len());
            for course in courses {
                let _ = writeln!(out, "{course}");
            }
        }
        out
    }

    /// Total courses across every category.
    pub fn total_courses(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates `(category, courses)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Course])> {
        self.categories
            .iter()
            .map(|(category, courses)| (category.as_str(), courses.as_slice()))
    }
}

impl Display for Catalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Key under which `category` is stored: trimmed (byte-order mark included)
/// and upper-cased.
pub fn normalize_category(category: &str) -> String {
    category
        .trim()
        .trim_start_matches(BYTE_ORDER_MARK)
        .trim()
        .to_uppercase()
}
