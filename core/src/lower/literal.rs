//! Literal lowering: turns literal tokens into values.

use std::borrow::Cow;

use pest::iterators::Pair;

use crate::ast::Expr;
use crate::error::Mt22Result;
use crate::lower::err::{ContractError, LiteralError};
use crate::script::Script;
use crate::syntax::rules::{self, Children, Rule};

pub(crate) fn lower_literal(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    let mut children = Children::of(&pair, script);
    let token = children.next()?;
    match token.as_rule() {
        Rule::int_lit => Ok(Expr::IntegerLit(integer_value(&token, script)?)),
        Rule::float_lit => Ok(Expr::FloatLit(float_value(&token, script)?)),
        Rule::str_lit => {
            let body = Children::of(&token, script).expect(Rule::str_body)?;
            Ok(Expr::StringLit(body.as_str().to_string()))
        }
        Rule::bool_lit => {
            let mut keyword = Children::of(&token, script);
            let value = keyword.next()?;
            match value.as_rule() {
                Rule::kw_true => Ok(Expr::BooleanLit(true)),
                Rule::kw_false => Ok(Expr::BooleanLit(false)),
                other => Err(keyword.violation(format!("unexpected boolean {:?}", other))),
            }
        }
        other => Err(children.violation(format!("unexpected literal {:?}", other))),
    }
}

/// Drops `_` digit separators (`1_000` is `1000`).
fn strip_separators(text: &str) -> Cow<'_, str> {
    if text.contains('_') {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// `.e3` is shorthand for `0.e3`; no other float spelling needs fixing up.
pub fn normalize_float_text(text: &str) -> Cow<'_, str> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some('.'), Some('e' | 'E')) => Cow::Owned(format!("0{}", text)),
        _ => Cow::Borrowed(text),
    }
}

pub(crate) fn integer_value(token: &Pair<Rule>, script: &Script) -> Mt22Result<i64> {
    let digits = strip_separators(token.as_str());
    digits.parse::<i64>().map_err(|_| {
        LiteralError::new(
            format!("Integer literal {} does not fit in 64 bits.", token.as_str()),
            rules::get_location_from_pair(token, script),
            rules::get_span_from_pair(token, script),
        )
        .into()
    })
}

pub(crate) fn float_value(token: &Pair<Rule>, script: &Script) -> Mt22Result<f64> {
    let digits = strip_separators(token.as_str());
    normalize_float_text(&digits).parse::<f64>().map_err(|_| {
        ContractError::new(
            format!("Float literal {} is not a number.", token.as_str()),
            "mt22.lower.literal.float_value".to_string(),
            rules::get_location_from_pair(token, script),
            rules::get_span_from_pair(token, script),
        )
        .into()
    })
}

/// An array dimension, written as an integer literal.
pub(crate) fn dimension_value(token: &Pair<Rule>, script: &Script) -> Mt22Result<usize> {
    let digits = strip_separators(token.as_str());
    digits.parse::<usize>().map_err(|_| {
        LiteralError::new(
            format!("Array dimension {} is too large.", token.as_str()),
            rules::get_location_from_pair(token, script),
            rules::get_span_from_pair(token, script),
        )
        .into()
    })
}
