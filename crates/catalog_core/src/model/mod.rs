//! Value types stored by the catalog.
//!
//! # Responsibility
//! - Define the course record and its difficulty level.
//!
//! # Invariants
//! - Model values are immutable once constructed.
//! - Levels form a closed set with a table-driven token mapping.

pub mod course;
pub mod level;
