//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts minic source
//! text into a stream of classified tokens. It handles:
//!
//! - Dispatching on the character under the cursor to a scan handler
//! - Recognition of keywords, identifiers, numeric literals and operators
//! - Block comments, string literals, delimiters and semicolons
//! - Recovering every malformed span into an `Error` token

pub mod lexer;
pub mod tokens;
