//! Single-line course record parser.
//!
//! Line shape: `category : name : day/month/year : level`. Whitespace around
//! every field is ignored.

use crate::model::course::{Course, CourseValidationError, DATE_FORMAT};
use crate::model::level::{Level, LevelParseError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field separator in course lines.
pub const FIELD_SEPARATOR: char = ':';

/// Fields expected after the category: name, date, level.
const COURSE_FIELD_COUNT: usize = 3;

/// Reason a course line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No `:` separating the category from the course fields.
    MissingSeparator,
    /// Category is blank after trim.
    EmptyCategory,
    /// Wrong number of fields after the category.
    FieldCount { expected: usize, found: usize },
    /// Date does not match `day/month/year`.
    InvalidDate(String),
    /// Level token is not in the level table.
    UnknownLevel(LevelParseError),
    /// Course value rejected (blank name).
    InvalidCourse(CourseValidationError),
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "missing `{FIELD_SEPARATOR}` after category")
            }
            Self::EmptyCategory => write!(f, "category must not be blank"),
            Self::FieldCount { expected, found } => write!(
                f,
                "expected {expected} fields after category (name, date, level), found {found}"
            ),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected day/month/year")
            }
            Self::UnknownLevel(err) => write!(f, "{err}"),
            Self::InvalidCourse(err) => write!(f, "{err}"),
        }
    }
}

/// Course line rejected during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based position in the source.
    pub line_number: usize,
    /// Raw line as read.
    pub line: String,
    pub kind: ParseErrorKind,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: {} (`{}`)",
            self.line_number, self.kind, self.line
        )
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::UnknownLevel(err) => Some(err),
            ParseErrorKind::InvalidCourse(err) => Some(err),
            _ => None,
        }
    }
}

/// Parses one course line into `(category, course)`.
///
/// The category is returned trimmed but not upper-cased; the catalog
/// normalizes it on insert.
///
/// # Errors
/// - Returns `ParseErrorKind` describing the first problem found.
pub fn parse_course_line(line: &str) -> Result<(String, Course), ParseErrorKind> {
    let (category, rest) = line
        .trim()
        .split_once(FIELD_SEPARATOR)
        .ok_or(ParseErrorKind::MissingSeparator)?;

    let category = category.trim();
    if category.is_empty() {
        return Err(ParseErrorKind::EmptyCategory);
    }

    let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [name, date, level] = fields[..] else {
        return Err(ParseErrorKind::FieldCount {
            expected: COURSE_FIELD_COUNT,
            found: fields.len(),
        });
    };

    if !has_four_digit_year(date) {
        return Err(ParseErrorKind::InvalidDate(date.to_string()));
    }
    let published = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| ParseErrorKind::InvalidDate(date.to_string()))?;
    let level = Level::parse_token(level).map_err(ParseErrorKind::UnknownLevel)?;
    let course = Course::new(name, published, level).map_err(ParseErrorKind::InvalidCourse)?;

    Ok((category.to_string(), course))
}

/// `%Y` accepts any digit count; the file format requires `yyyy`.
fn has_four_digit_year(date: &str) -> bool {
    date.rsplit('/')
        .next()
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::{parse_course_line, ParseError, ParseErrorKind};
    use crate::model::course::CourseValidationError;
    use crate::model::level::Level;
    use chrono::NaiveDate;

    #[test]
    fn parses_padded_fields() {
        let (category, course) =
            parse_course_line("  web :  HTML5 esencial :3/12/2019:  Principiante ").unwrap();
        assert_eq!(category, "web");
        assert_eq!(course.name(), "HTML5 esencial");
        assert_eq!(
            course.published(),
            NaiveDate::from_ymd_opt(2019, 12, 3).unwrap()
        );
        assert_eq!(course.level(), Level::Beginner);
    }

    #[test]
    fn rejects_line_without_separator() {
        assert_eq!(
            parse_course_line("just some text").unwrap_err(),
            ParseErrorKind::MissingSeparator
        );
    }

    #[test]
    fn rejects_blank_category() {
        assert_eq!(
            parse_course_line(" : name : 01/01/2020 : avanzado").unwrap_err(),
            ParseErrorKind::EmptyCategory
        );
    }

    #[test]
    fn rejects_extra_field() {
        assert_eq!(
            parse_course_line("web : a : b : 01/01/2020 : avanzado").unwrap_err(),
            ParseErrorKind::FieldCount {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn rejects_impossible_date() {
        assert_eq!(
            parse_course_line("web : a : 31/02/2020 : avanzado").unwrap_err(),
            ParseErrorKind::InvalidDate("31/02/2020".to_string())
        );
    }

    #[test]
    fn rejects_short_or_long_year() {
        for date in ["03/12/19", "03/12/019", "03/12/20190"] {
            assert_eq!(
                parse_course_line(&format!("web : a : {date} : avanzado")).unwrap_err(),
                ParseErrorKind::InvalidDate(date.to_string())
            );
        }
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            parse_course_line("web :   : 01/01/2020 : avanzado").unwrap_err(),
            ParseErrorKind::InvalidCourse(CourseValidationError::EmptyName)
        );
    }

    #[test]
    fn parse_error_display_names_line_and_reason() {
        let err = ParseError {
            line_number: 7,
            line: "web : a : 01/01/2020 : xyz".to_string(),
            kind: parse_course_line("web : a : 01/01/2020 : xyz").unwrap_err(),
        };
        let message = err.to_string();
        assert!(message.starts_with("line 7: unknown level `xyz`"));
        assert!(message.contains("web : a : 01/01/2020 : xyz"));
    }
}
