//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate loader and catalog calls into use-case level APIs.
//! - Keep the CLI decoupled from parsing and storage details.

pub mod catalog_service;
