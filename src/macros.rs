//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SINGLE_CHAR_HANDLER!` - Defines a scan handler for one-character tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Defines a scan handler that turns the character under the cursor into a
/// single token of the given kind and advances past it.
///
/// # Example
///
/// ```ignore
/// MK_SINGLE_CHAR_HANDLER!(semicolon_handler, TokenKind::Semicolon);
/// ```
#[macro_export]
macro_rules! MK_SINGLE_CHAR_HANDLER {
    ($name:ident, $kind:expr) => {
        fn $name(lexer: &mut Lexer<'_>) {
            let start = lexer.pos();
            lexer.bump();
            lexer.push($kind, start);
        }
    };
}
