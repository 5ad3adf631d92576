use crate::error::{Level, impl_mt22_error};
use crate::location::{Location, Span};

/// The syntax tree did not have the shape the grammar promises.
///
/// Always `Level::Critical`: it points at a parser/lowering mismatch, never at
/// a mistake in the user's program.
#[derive(Debug, Clone)]
pub struct ContractError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl ContractError {
    pub fn new(message: String, issuer: String, location: Option<Location>, span: Option<Span>) -> Self {
        ContractError {
            level: Level::Critical,
            message,
            issuer,
            location,
            span,
        }
    }
}

impl_mt22_error!(ContractError);

/// A literal whose text is well-formed but whose value cannot be represented.
#[derive(Debug, Clone)]
pub struct LiteralError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl LiteralError {
    pub fn new(message: String, location: Option<Location>, span: Option<Span>) -> Self {
        LiteralError {
            level: Level::Error,
            message,
            issuer: "mt22.lower.literal".to_string(),
            location,
            span,
        }
    }
}

impl_mt22_error!(LiteralError);
