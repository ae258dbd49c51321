//! Core domain logic for the course catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod source;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::course::{Course, CourseValidationError, DATE_FORMAT};
pub use model::level::{Level, LevelParseError};
pub use repo::catalog_repo::{
    normalize_category, Catalog, CatalogError, CatalogResult, CATEGORY_NOT_FOUND,
};
pub use service::catalog_service::{
    describe_oldest, CatalogService, ServiceError, ServiceResult, DEMO_DELETIONS,
};
pub use source::line_parser::{parse_course_line, ParseError, ParseErrorKind};
pub use source::loader::{load_from_lines, load_from_path, load_from_reader, LoadError, LoadResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
