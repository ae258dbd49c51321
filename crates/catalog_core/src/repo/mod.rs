//! Catalog storage.
//!
//! # Responsibility
//! - Hold courses grouped by category in memory.
//! - Expose add/count/delete/oldest/render operations.
//!
//! # Invariants
//! - Category keys are upper-case and iterate in ascending order.
//! - Lookup misses are reported as a sentinel (`count_in`) or a semantic
//!   `CategoryNotFound` error (`delete_by_level`), never as silent empties.

pub mod catalog_repo;
