//! Bulk catalog loading from line sources.
//!
//! # Responsibility
//! - Feed course lines from iterators, readers or files into a catalog.
//!
//! # Invariants
//! - Loads are all-or-nothing: every line is parsed before the catalog is
//!   touched, so a failed load leaves it unchanged.
//! - Blank lines are skipped and still count toward line numbers.
//! - File handles are scoped to the call.

use crate::model::course::Course;
use crate::repo::catalog_repo::Catalog;
use crate::source::line_parser::{parse_course_line, ParseError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Editors may prefix UTF-8 files with a byte-order mark.
const BYTE_ORDER_MARK: char = '\u{feff}';

pub type LoadResult<T> = Result<T, LoadError>;

/// Failure while loading courses into a catalog.
#[derive(Debug)]
pub enum LoadError {
    /// Source file could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// Reading a line failed.
    Io { line_number: usize, source: io::Error },
    /// A line was malformed.
    Parse(ParseError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open `{}`: {source}", path.display())
            }
            Self::Io {
                line_number,
                source,
            } => write!(f, "failed to read line {line_number}: {source}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<ParseError> for LoadError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

/// Loads course lines into `catalog`.
///
/// Returns the number of courses added.
///
/// # Errors
/// - Returns `LoadError::Parse` for the first malformed line; `catalog` is
///   left unchanged.
pub fn load_from_lines<I, S>(catalog: &mut Catalog, lines: I) -> LoadResult<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_fallible(catalog, lines.into_iter().map(Ok))
}

/// Loads course lines from a buffered reader.
///
/// # Errors
/// - Returns `LoadError::Io` when reading fails.
/// - Returns `LoadError::Parse` for the first malformed line.
pub fn load_from_reader<R: BufRead>(catalog: &mut Catalog, reader: R) -> LoadResult<usize> {
    load_fallible(catalog, reader.lines())
}

/// Opens `path` and loads its course lines.
///
/// # Errors
/// - Returns `LoadError::Open` when the file cannot be opened.
/// - Otherwise as [`load_from_reader`].
pub fn load_from_path(catalog: &mut Catalog, path: impl AsRef<Path>) -> LoadResult<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "event=source_open module=source status=ok path={}",
        path.display()
    );
    load_from_reader(catalog, BufReader::new(file))
}

fn load_fallible<I, S>(catalog: &mut Catalog, lines: I) -> LoadResult<usize>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut parsed: Vec<(String, Course)> = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in lines.enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| LoadError::Io {
            line_number,
            source,
        })?;
        let line = line.as_ref();
        let line = if index == 0 {
            line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line)
        } else {
            line
        };
        if line.trim().is_empty() {
            skipped += 1;
            continue;
        }

        let entry = parse_course_line(line).map_err(|kind| {
            warn!(
                "event=course_line_rejected module=source status=error line={} reason={}",
                line_number, kind
            );
            ParseError {
                line_number,
                line: line.to_string(),
                kind,
            }
        })?;
        parsed.push(entry);
    }

    let loaded = parsed.len();
    for (category, course) in parsed {
        catalog.add_course(&category, course);
    }

    debug!(
        "event=courses_loaded module=source status=ok loaded={} blank_lines={}",
        loaded, skipped
    );
    Ok(loaded)
}
