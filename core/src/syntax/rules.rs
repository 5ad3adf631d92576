use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;

use crate::error::Mt22Result;
use crate::location::{Location, Span};
use crate::lower::err::ContractError;
use crate::script::Script;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct Mt22Parser;

pub fn get_location_from_pair(pair: &Pair<Rule>, script: &Script) -> Option<Location> {
    Some(Location::from_position(&script.name, pair.as_span().start_pos()))
}

pub fn get_span_from_pair(pair: &Pair<Rule>, script: &Script) -> Option<Span> {
    Some(Span::from_pest(&script.name, pair.as_span()))
}

/// Ordered cursor over the children of one rule node.
///
/// This is the whole contract the lowering pass relies on: presence tests for
/// optional children and ordered access to required ones. Any child that is
/// not where the grammar puts it is reported as a `ContractError`.
pub(crate) struct Children<'i> {
    parent: Rule,
    pairs: Pairs<'i, Rule>,
    location: Option<Location>,
    span: Option<Span>,
}

impl<'i> Children<'i> {
    pub(crate) fn of(pair: &Pair<'i, Rule>, script: &Script) -> Self {
        Children {
            parent: pair.as_rule(),
            pairs: pair.clone().into_inner(),
            location: get_location_from_pair(pair, script),
            span: get_span_from_pair(pair, script),
        }
    }

    pub(crate) fn peek_rule(&self) -> Option<Rule> {
        self.pairs.peek().map(|pair| pair.as_rule())
    }

    /// Next child, whatever its rule.
    pub(crate) fn next(&mut self) -> Mt22Result<Pair<'i, Rule>> {
        match self.pairs.next() {
            Some(pair) => Ok(pair),
            None => Err(self.violation("expected another child but found none".to_string())),
        }
    }

    /// Next child, which must be a `rule` node.
    pub(crate) fn expect(&mut self, rule: Rule) -> Mt22Result<Pair<'i, Rule>> {
        match self.pairs.next() {
            Some(pair) if pair.as_rule() == rule => Ok(pair),
            Some(pair) => Err(self.violation(format!(
                "expected {:?} but found {:?}",
                rule,
                pair.as_rule()
            ))),
            None => Err(self.violation(format!("expected {:?} but found none", rule))),
        }
    }

    /// Consumes the next child only when it is a `rule` node.
    pub(crate) fn optional(&mut self, rule: Rule) -> Option<Pair<'i, Rule>> {
        match self.pairs.peek() {
            Some(pair) if pair.as_rule() == rule => self.pairs.next(),
            _ => None,
        }
    }

    /// Presence test for an optional token; consumes it when present.
    pub(crate) fn has(&mut self, rule: Rule) -> bool {
        self.optional(rule).is_some()
    }

    /// Consumes the run of consecutive `rule` children.
    pub(crate) fn many(&mut self, rule: Rule) -> Vec<Pair<'i, Rule>> {
        let mut found = Vec::new();
        while let Some(pair) = self.optional(rule) {
            found.push(pair);
        }
        found
    }

    /// Fails when children remain that the caller did not consume.
    pub(crate) fn finish(mut self) -> Mt22Result<()> {
        match self.pairs.next() {
            None => Ok(()),
            Some(pair) => Err(self.violation(format!("unexpected trailing {:?}", pair.as_rule()))),
        }
    }

    /// Builds a contract violation located at the parent node.
    pub(crate) fn violation(&self, message: String) -> Box<dyn crate::error::Mt22ErrorExt> {
        ContractError::new(
            format!("{:?}: {}", self.parent, message),
            format!("mt22.lower.{:?}", self.parent),
            self.location.clone(),
            self.span.clone(),
        )
        .into()
    }
}
