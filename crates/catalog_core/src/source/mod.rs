//! Line-oriented course sources.
//!
//! # Responsibility
//! - Parse `category : name : date : level` lines into courses.
//! - Load whole sources into a catalog without partial mutation on failure.

pub mod line_parser;
pub mod loader;
