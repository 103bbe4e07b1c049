use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
            ErrorImpl::MalformedComment { .. } => "MalformedComment",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { token } if token == "0" => {
                ErrorTip::Suggestion(String::from(
                    "A bare `0` is not accepted as an integer literal",
                ))
            }
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, numbers cannot run into letters or end with a bare `.`",
                token
            )),
            ErrorImpl::InvalidOperator { token } => ErrorTip::Suggestion(format!(
                "Unknown operator `{}`, did you forget a space between operators?",
                token
            )),
            ErrorImpl::MalformedComment { .. } => ErrorTip::Suggestion(String::from(
                "Comments start with `\\*`",
            )),
            ErrorImpl::UnterminatedComment { .. } => ErrorTip::Suggestion(String::from(
                "Comment is never closed, expected `*\\`",
            )),
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "String literal is missing its closing `\"`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at offset {} in {}",
            self.internal_error, self.position.0, self.position.1
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedCharacter { token: String },
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("invalid operator: {token:?}")]
    InvalidOperator { token: String },
    #[error("malformed comment: {token:?}")]
    MalformedComment { token: String },
    #[error("unterminated comment: {token:?}")]
    UnterminatedComment { token: String },
    #[error("unterminated string: {token:?}")]
    UnterminatedString { token: String },
}
