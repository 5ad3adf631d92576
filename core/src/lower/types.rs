//! Type lowering: primitive keywords, `auto`, `void` and array types.

use pest::iterators::Pair;

use crate::ast::{PrimitiveType, Type};
use crate::error::Mt22Result;
use crate::lower::literal;
use crate::script::Script;
use crate::syntax::rules::{Children, Rule};

/// Return type of a function: `void` or any variable type.
pub(crate) fn lower_func_type(pair: Pair<Rule>, script: &Script) -> Mt22Result<Type> {
    let mut children = Children::of(&pair, script);
    if children.has(Rule::kw_void) {
        return Ok(Type::Void);
    }
    let ty = lower_var_type(children.expect(Rule::var_type)?, script)?;
    children.finish()?;
    Ok(ty)
}

pub(crate) fn lower_var_type(pair: Pair<Rule>, script: &Script) -> Mt22Result<Type> {
    let mut children = Children::of(&pair, script);
    let form = children.next()?;
    match form.as_rule() {
        Rule::prim_type => Ok(lower_prim_type(form, script)?.into()),
        Rule::kw_auto => Ok(Type::Auto),
        Rule::array_type => lower_array_type(form, script),
        other => Err(children.violation(format!("unexpected type form {:?}", other))),
    }
}

fn lower_prim_type(pair: Pair<Rule>, script: &Script) -> Mt22Result<PrimitiveType> {
    let mut children = Children::of(&pair, script);
    let keyword = children.next()?;
    match keyword.as_rule() {
        Rule::kw_integer => Ok(PrimitiveType::Integer),
        Rule::kw_float => Ok(PrimitiveType::Float),
        Rule::kw_string => Ok(PrimitiveType::String),
        Rule::kw_boolean => Ok(PrimitiveType::Boolean),
        other => Err(children.violation(format!("unexpected primitive type {:?}", other))),
    }
}

fn lower_array_type(pair: Pair<Rule>, script: &Script) -> Mt22Result<Type> {
    let mut children = Children::of(&pair, script);

    let dims_pair = children.expect(Rule::dimensions)?;
    let dimensions = Children::of(&dims_pair, script)
        .many(Rule::int_lit)
        .iter()
        .map(|token| literal::dimension_value(token, script))
        .collect::<Mt22Result<Vec<usize>>>()?;
    if dimensions.is_empty() {
        return Err(children.violation("array type without dimensions".to_string()));
    }

    let element = lower_prim_type(children.expect(Rule::prim_type)?, script)?;
    children.finish()?;

    Ok(Type::array(dimensions, element))
}
