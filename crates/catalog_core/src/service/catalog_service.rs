//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable load/query/delete entry points for CLI callers.
//! - Emit metadata-only log events around catalog mutations.
//! - Drive the demonstration walkthrough.
//!
//! # Invariants
//! - Service APIs never bypass catalog or loader contracts.
//! - A failed load leaves the owned catalog unchanged.

use crate::model::course::{Course, DATE_FORMAT};
use crate::model::level::Level;
use crate::repo::catalog_repo::{normalize_category, Catalog, CatalogError};
use crate::source::loader::{load_from_lines, load_from_path, load_from_reader, LoadError};
use log::{error, info};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Category/level pairs deleted by the demonstration walkthrough.
pub const DEMO_DELETIONS: &[(&str, Level)] = &[
    ("bases de datos", Level::Advanced),
    ("cms", Level::Intermediate),
];

const SECTION_RULE: &str = "------------------";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Loading a source failed.
    Load(LoadError),
    /// Catalog rejected the operation.
    Catalog(CatalogError),
    /// Writing output failed.
    Output(io::Error),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<LoadError> for ServiceError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

impl From<CatalogError> for ServiceError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<io::Error> for ServiceError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

/// Use-case wrapper that owns one catalog.
#[derive(Debug, Default)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    /// Creates a service over an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Adds one course.
    pub fn add_course(&mut self, category: &str, course: Course) {
        self.catalog.add_course(category, course);
    }

    /// Loads a course file.
    ///
    /// Returns the number of courses added.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> ServiceResult<usize> {
        let path = path.as_ref();
        let result = load_from_path(&mut self.catalog, path);
        self.log_load(&path.display().to_string(), result)
    }

    /// Loads courses from a buffered reader; `origin` only labels log events.
    pub fn load_reader<R: BufRead>(&mut self, origin: &str, reader: R) -> ServiceResult<usize> {
        let result = load_from_reader(&mut self.catalog, reader);
        self.log_load(origin, result)
    }

    /// Loads courses from in-memory lines.
    pub fn load_lines<I, S>(&mut self, origin: &str, lines: I) -> ServiceResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let result = load_from_lines(&mut self.catalog, lines);
        self.log_load(origin, result)
    }

    /// Deletes every course of `level` in `category`.
    ///
    /// Returns removed course names in ascending order.
    pub fn delete_by_level(
        &mut self,
        category: &str,
        level: Level,
    ) -> ServiceResult<BTreeSet<String>> {
        match self.catalog.delete_by_level(category, level) {
            Ok(removed) => {
                info!(
                    "event=courses_deleted module=service status=ok category={} level={} removed={}",
                    normalize_category(category),
                    level,
                    removed.len()
                );
                Ok(removed)
            }
            Err(err) => {
                error!(
                    "event=courses_deleted module=service status=error level={} error={}",
                    level, err
                );
                Err(err.into())
            }
        }
    }

    /// Writes the catalog rendering to `out`.
    pub fn print<W: Write>(&self, out: &mut W) -> ServiceResult<()> {
        writeln!(out, "{}", self.catalog.render())?;
        Ok(())
    }

    /// Runs the walkthrough: render, oldest course, two deletions, render.
    ///
    /// A demo category missing from the catalog is reported in the output
    /// rather than aborting the walkthrough.
    pub fn run_demo<W: Write>(&mut self, out: &mut W) -> ServiceResult<()> {
        self.print(out)?;
        writeln!(out, "Oldest course: {}\n", describe_oldest(&self.catalog))?;

        writeln!(out, "{SECTION_RULE}")?;
        for (category, level) in DEMO_DELETIONS {
            writeln!(
                out,
                "Deleting courses of {} with level {}",
                normalize_category(category),
                level
            )?;
            match self.delete_by_level(category, *level) {
                Ok(removed) => writeln!(out, "Deleted = {}\n", format_names(&removed))?,
                Err(ServiceError::Catalog(err)) => writeln!(out, "Skipped: {err}\n")?,
                Err(other) => return Err(other),
            }
        }
        writeln!(out, "{SECTION_RULE}\n")?;

        writeln!(out, "After deleting ....")?;
        self.print(out)
    }

    fn log_load(&self, origin: &str, result: Result<usize, LoadError>) -> ServiceResult<usize> {
        match result {
            Ok(loaded) => {
                info!(
                    "event=catalog_load module=service status=ok origin={} loaded={} categories={}",
                    origin,
                    loaded,
                    self.catalog.len()
                );
                Ok(loaded)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=service status=error origin={} error={}",
                    origin, err
                );
                Err(err.into())
            }
        }
    }
}

/// `name (dd/mm/yyyy)` for the oldest course, or `none` when empty.
pub fn describe_oldest(catalog: &Catalog) -> String {
    catalog.oldest_course().map_or_else(
        || "none".to_string(),
        |course| {
            format!(
                "{} ({})",
                course.name(),
                course.published().format(DATE_FORMAT)
            )
        },
    )
}

fn format_names(names: &BTreeSet<String>) -> String {
    let joined = names.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}
