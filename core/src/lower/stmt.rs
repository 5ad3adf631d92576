//! Statement lowering.

use pest::iterators::Pair;

use crate::ast::{Assign, Block, Stmt};
use crate::error::Mt22Result;
use crate::lower::expr::{lower_call, lower_expression, lower_lvalue};
use crate::lower::{Lowered, decl};
use crate::script::Script;
use crate::syntax::rules::{Children, Rule};

/// Lowers `{ ... }`. Local variable groups are spliced into the block as
/// sibling `Stmt::VarDecl`s, never nested.
pub(crate) fn lower_block(pair: Pair<Rule>, script: &Script) -> Mt22Result<Block> {
    let mut children = Children::of(&pair, script);
    let mut body = Vec::new();

    while let Some(rule) = children.peek_rule() {
        let item = children.next()?;
        let lowered = match rule {
            Rule::var_decl => decl::lower_var_decl(item, script)?.map(Stmt::VarDecl),
            Rule::statement => Lowered::Single(lower_statement(item, script)?),
            other => return Err(children.violation(format!("unexpected block item {:?}", other))),
        };
        lowered.append_to(&mut body);
    }

    Ok(Block { body })
}

pub(crate) fn lower_statement(pair: Pair<Rule>, script: &Script) -> Mt22Result<Stmt> {
    let mut children = Children::of(&pair, script);
    let form = children.next()?;
    let stmt = match form.as_rule() {
        Rule::if_stmt => lower_if(form, script)?,
        Rule::for_stmt => lower_for(form, script)?,
        Rule::while_stmt => lower_while(form, script)?,
        Rule::do_while_stmt => lower_do_while(form, script)?,
        Rule::break_stmt => Stmt::Break,
        Rule::continue_stmt => Stmt::Continue,
        Rule::return_stmt => lower_return(form, script)?,
        Rule::block => Stmt::Block(lower_block(form, script)?),
        Rule::call_stmt => {
            let mut inner = Children::of(&form, script);
            let call = lower_call(inner.expect(Rule::func_call)?, script)?;
            inner.finish()?;
            Stmt::Call(call)
        }
        Rule::assign_stmt => {
            let mut inner = Children::of(&form, script);
            let assign = lower_assign(inner.expect(Rule::assign)?, script)?;
            inner.finish()?;
            Stmt::Assign(assign)
        }
        other => return Err(children.violation(format!("unexpected statement {:?}", other))),
    };
    children.finish()?;
    Ok(stmt)
}

/// `lhs = expression`; shared by assignment statements and `for` headers.
fn lower_assign(pair: Pair<Rule>, script: &Script) -> Mt22Result<Assign> {
    let mut children = Children::of(&pair, script);
    let target = lower_lvalue(children.expect(Rule::lhs)?, script)?;
    let value = lower_expression(children.expect(Rule::expression)?, script)?;
    children.finish()?;
    Ok(Assign { target, value })
}

fn lower_if(pair: Pair<Rule>, script: &Script) -> Mt22Result<Stmt> {
    let mut children = Children::of(&pair, script);
    let condition = lower_expression(children.expect(Rule::expression)?, script)?;
    let then_branch = lower_statement(children.expect(Rule::statement)?, script)?;
    let else_branch = match children.optional(Rule::statement) {
        Some(branch) => Some(Box::new(lower_statement(branch, script)?)),
        None => None,
    };
    children.finish()?;

    Ok(Stmt::If {
        condition,
        then_branch: Box::new(then_branch),
        else_branch,
    })
}

fn lower_for(pair: Pair<Rule>, script: &Script) -> Mt22Result<Stmt> {
    let mut children = Children::of(&pair, script);
    let init = lower_assign(children.expect(Rule::assign)?, script)?;
    let condition = lower_expression(children.expect(Rule::expression)?, script)?;
    let update = lower_expression(children.expect(Rule::expression)?, script)?;
    let body = lower_statement(children.expect(Rule::statement)?, script)?;
    children.finish()?;

    Ok(Stmt::For {
        init,
        condition,
        update,
        body: Box::new(body),
    })
}

fn lower_while(pair: Pair<Rule>, script: &Script) -> Mt22Result<Stmt> {
    let mut children = Children::of(&pair, script);
    let condition = lower_expression(children.expect(Rule::expression)?, script)?;
    let body = lower_statement(children.expect(Rule::statement)?, script)?;
    children.finish()?;

    Ok(Stmt::While {
        condition,
        body: Box::new(body),
    })
}

fn lower_do_while(pair: Pair<Rule>, script: &Script) -> Mt22Result<Stmt> {
    let mut children = Children::of(&pair, script);
    let body = lower_block(children.expect(Rule::block)?, script)?;
    let condition = lower_expression(children.expect(Rule::expression)?, script)?;
    children.finish()?;

    Ok(Stmt::DoWhile { body, condition })
}

fn lower_return(pair: Pair<Rule>, script: &Script) -> Mt22Result<Stmt> {
    let mut children = Children::of(&pair, script);
    let value = match children.optional(Rule::expression) {
        Some(expr) => Some(lower_expression(expr, script)?),
        None => None,
    };
    children.finish()?;
    Ok(Stmt::Return(value))
}
