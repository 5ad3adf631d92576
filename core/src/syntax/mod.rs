//! Grammar-driven parsing of MT22 source into a pest concrete syntax tree.
//!
//! The lowering pass never re-checks what the grammar already guarantees; it
//! only walks the tree this module hands it.

pub mod err;
pub mod rules;

use log::debug;
use pest::Parser;
use pest::iterators::Pair;

pub use rules::{Mt22Parser, Rule};

use crate::error::Mt22Result;
use crate::script::Script;
use err::{EmptyScriptError, SyntaxError};

/// Parses a whole script and returns its `program` node.
pub fn parse_script(script: &Script) -> Mt22Result<Pair<'_, Rule>> {
    if script.is_empty() {
        return Err(EmptyScriptError::new(
            "mt22.syntax.parse_script".to_string(),
            Some(script.start_location()),
        )
        .into());
    }

    let mut pairs = Mt22Parser::parse(Rule::program, &script.content)
        .map_err(|e| SyntaxError::from_pest(e, &script.name))?;
    debug!("parsed {}", script.name);

    pairs.next().ok_or_else(|| {
        SyntaxError::with(
            crate::Level::Critical,
            "Parser produced no program node.".to_string(),
            "mt22.syntax.parse_script".to_string(),
            Some(script.start_location()),
            None,
        )
        .into()
    })
}
