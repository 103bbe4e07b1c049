//! Error types for lexical diagnostics.
//!
//! This module defines the error reported alongside each `Error` token:
//!
//! - Error structures with source position information
//! - One variant per cause of a malformed span
//! - Helpful error messages and suggestions

pub mod errors;
