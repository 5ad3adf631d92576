//! Expression lowering.
//!
//! The grammar nests one rule per precedence tier, loosest first:
//!
//! | tier | rule             | operators                      | shape                 |
//! |------|------------------|--------------------------------|-----------------------|
//! | 0    | `expression`     | `::`                           | at most one, no chain |
//! | 1    | `relational`     | `==` `!=` `<` `<=` `>` `>=`    | at most one, no chain |
//! | 2    | `logical`        | `&&` `\|\|`                    | left-associative      |
//! | 3    | `additive`       | `+` `-`                        | left-associative      |
//! | 4    | `multiplicative` | `*` `/` `%`                    | left-associative      |
//! | 5    | `not_expr`       | prefix `!`                     | right, chains         |
//! | 6    | `neg_expr`       | prefix `-`                     | right, chains         |
//! | 7    | `primary`        | literals, names, calls, cells, `( )`, `{ }` |          |
//!
//! Each tier either builds its operator node or hands its single child to the
//! next tier unchanged. Chains and prefix runs are folded with loops, so a long
//! `a + b + ... + z` does not deepen the native stack.

use pest::iterators::Pair;

use crate::ast::{ArrayCell, BinaryOperator, Call, Expr, Lvalue, UnaryOperator};
use crate::error::Mt22Result;
use crate::lower::literal;
use crate::script::Script;
use crate::syntax::rules::{Children, Rule};

type TierFn<'i> = fn(Pair<'i, Rule>, &Script) -> Mt22Result<Expr>;

/// Tier 0, also the entry point for every nested expression.
pub(crate) fn lower_expression(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    lower_non_associative(pair, script, Rule::relational, Rule::concat_op, lower_relational)
}

fn lower_relational(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    lower_non_associative(pair, script, Rule::logical, Rule::rel_op, lower_logical)
}

fn lower_logical(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    lower_left_associative(pair, script, Rule::additive, Rule::logic_op, lower_additive)
}

fn lower_additive(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    lower_left_associative(pair, script, Rule::multiplicative, Rule::add_op, lower_multiplicative)
}

fn lower_multiplicative(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    lower_left_associative(pair, script, Rule::not_expr, Rule::mul_op, lower_not)
}

fn lower_not(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    lower_prefix(pair, script, Rule::not_op, Rule::neg_expr, lower_neg)
}

fn lower_neg(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    lower_prefix(pair, script, Rule::neg_op, Rule::primary, lower_primary)
}

/// `operand (op operand)?`
fn lower_non_associative<'i>(
    pair: Pair<'i, Rule>,
    script: &Script,
    operand: Rule,
    op_rule: Rule,
    lower_operand: TierFn<'i>,
) -> Mt22Result<Expr> {
    let mut children = Children::of(&pair, script);
    let left = lower_operand(children.expect(operand)?, script)?;

    let node = match children.optional(op_rule) {
        Some(op_pair) => {
            let op = binary_operator(&op_pair, &children)?;
            let right = lower_operand(children.expect(operand)?, script)?;
            Expr::binary(op, left, right)
        }
        None => left,
    };

    children.finish()?;
    Ok(node)
}

/// `operand (op operand)*`, folded to the left: `a - b - c` is `(a - b) - c`.
fn lower_left_associative<'i>(
    pair: Pair<'i, Rule>,
    script: &Script,
    operand: Rule,
    op_rule: Rule,
    lower_operand: TierFn<'i>,
) -> Mt22Result<Expr> {
    let mut children = Children::of(&pair, script);
    let mut node = lower_operand(children.expect(operand)?, script)?;

    while let Some(op_pair) = children.optional(op_rule) {
        let op = binary_operator(&op_pair, &children)?;
        let right = lower_operand(children.expect(operand)?, script)?;
        node = Expr::binary(op, node, right);
    }

    children.finish()?;
    Ok(node)
}

/// `op* operand` where the grammar nests each `op` one level deeper.
///
/// Operators are collected walking down, then applied innermost first, so
/// `!!x` is `!(!x)`.
fn lower_prefix<'i>(
    pair: Pair<'i, Rule>,
    script: &Script,
    op_rule: Rule,
    operand: Rule,
    lower_operand: TierFn<'i>,
) -> Mt22Result<Expr> {
    let tier = pair.as_rule();
    let mut ops = Vec::new();
    let mut current = pair;

    loop {
        let mut children = Children::of(&current, script);
        match children.optional(op_rule) {
            Some(op_pair) => {
                ops.push(unary_operator(&op_pair, &children)?);
                current = children.expect(tier)?;
                children.finish()?;
            }
            None => {
                let mut node = lower_operand(children.expect(operand)?, script)?;
                children.finish()?;
                while let Some(op) = ops.pop() {
                    node = Expr::unary(op, node);
                }
                return Ok(node);
            }
        }
    }
}

/// Tier 7.
fn lower_primary(pair: Pair<Rule>, script: &Script) -> Mt22Result<Expr> {
    let mut children = Children::of(&pair, script);
    let operand = children.next()?;
    let node = match operand.as_rule() {
        Rule::literal => literal::lower_literal(operand, script)?,
        Rule::array_cell => Expr::ArrayCell(lower_array_cell(operand, script)?),
        Rule::func_call => Expr::FuncCall(lower_call(operand, script)?),
        Rule::identifier => Expr::Id(operand.as_str().to_string()),
        // Parentheses restart at the loosest tier.
        Rule::expression => lower_expression(operand, script)?,
        Rule::array_lit => {
            let mut inner = Children::of(&operand, script);
            let elements = match inner.optional(Rule::arguments) {
                Some(args) => lower_arguments(args, script)?,
                None => Vec::new(),
            };
            inner.finish()?;
            Expr::ArrayLit(elements)
        }
        other => {
            return Err(children.violation(format!("unexpected primary {:?}", other)));
        }
    };
    children.finish()?;
    Ok(node)
}

/// Comma-separated expressions, in source order.
pub(crate) fn lower_arguments(pair: Pair<Rule>, script: &Script) -> Mt22Result<Vec<Expr>> {
    let mut children = Children::of(&pair, script);
    let args = children
        .many(Rule::expression)
        .into_iter()
        .map(|arg| lower_expression(arg, script))
        .collect::<Mt22Result<Vec<Expr>>>()?;
    children.finish()?;
    Ok(args)
}

pub(crate) fn lower_array_cell(pair: Pair<Rule>, script: &Script) -> Mt22Result<ArrayCell> {
    let mut children = Children::of(&pair, script);
    let name = children.expect(Rule::identifier)?.as_str().to_string();
    let indices = lower_arguments(children.expect(Rule::arguments)?, script)?;
    if indices.is_empty() {
        return Err(children.violation("array cell without indices".to_string()));
    }
    children.finish()?;
    Ok(ArrayCell { name, indices })
}

/// `name(args)` for both call expressions and call statements.
pub(crate) fn lower_call(pair: Pair<Rule>, script: &Script) -> Mt22Result<Call> {
    let mut children = Children::of(&pair, script);
    let name = children.expect(Rule::identifier)?.as_str().to_string();
    let args = match children.optional(Rule::arguments) {
        Some(args) => lower_arguments(args, script)?,
        None => Vec::new(),
    };
    children.finish()?;
    Ok(Call { name, args })
}

pub(crate) fn lower_lvalue(pair: Pair<Rule>, script: &Script) -> Mt22Result<Lvalue> {
    let mut children = Children::of(&pair, script);
    let target = children.next()?;
    let lvalue = match target.as_rule() {
        Rule::identifier => Lvalue::Id(target.as_str().to_string()),
        Rule::array_cell => Lvalue::ArrayCell(lower_array_cell(target, script)?),
        other => return Err(children.violation(format!("unexpected assignment target {:?}", other))),
    };
    children.finish()?;
    Ok(lvalue)
}

fn binary_operator(op_pair: &Pair<Rule>, children: &Children) -> Mt22Result<BinaryOperator> {
    BinaryOperator::from_symbol(op_pair.as_str())
        .ok_or_else(|| children.violation(format!("unknown binary operator {:?}", op_pair.as_str())))
}

fn unary_operator(op_pair: &Pair<Rule>, children: &Children) -> Mt22Result<UnaryOperator> {
    UnaryOperator::from_symbol(op_pair.as_str())
        .ok_or_else(|| children.violation(format!("unknown unary operator {:?}", op_pair.as_str())))
}
