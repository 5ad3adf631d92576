use crate::error::{Level, impl_mt22_error};
use crate::location::{Location, Span};

use super::rules::Rule;

#[derive(Debug, Clone)]
pub struct EmptyScriptError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl EmptyScriptError {
    pub fn new(issuer: String, location: Option<Location>) -> Self {
        EmptyScriptError {
            level: Level::Error,
            message: "The provided script is empty.".to_string(),
            issuer,
            location,
            span: None,
        }
    }
}

impl_mt22_error!(EmptyScriptError);

#[derive(Debug, Clone)]
pub struct SyntaxError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl SyntaxError {
    pub fn with(
        level: Level,
        message: String,
        issuer: String,
        location: Option<Location>,
        span: Option<Span>,
    ) -> Self {
        SyntaxError {
            level,
            message,
            issuer,
            location,
            span,
        }
    }

    /// Converts a pest failure, keeping its line/column.
    pub fn from_pest(err: pest::error::Error<Rule>, file: &str) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos(pos) => pos,
            pest::error::LineColLocation::Span(start, _) => start,
        };
        SyntaxError::with(
            Level::Error,
            format!("Syntax error: {}", err.variant.message()),
            "mt22.syntax.parse_script".to_string(),
            Some(Location::new(file.to_string(), line, column)),
            None,
        )
    }
}

impl_mt22_error!(SyntaxError);
