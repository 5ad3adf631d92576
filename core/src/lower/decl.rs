//! Declaration lowering: the program, functions, parameters and variable groups.

use log::{debug, trace};
use pest::iterators::Pair;

use crate::ast::{Decl, FuncDecl, ParamDecl, Program, VarDecl};
use crate::error::{Level, Mt22Result};
use crate::lower::expr::lower_expression;
use crate::lower::{Lowered, stmt, types};
use crate::script::Script;
use crate::syntax::err::SyntaxError;
use crate::syntax::rules::{self, Children, Rule};

/// Lowers a `program` node into a flat, source-ordered declaration list.
pub fn lower_program(pair: Pair<Rule>, script: &Script) -> Mt22Result<Program> {
    let mut children = Children::of(&pair, script);
    let mut decls = Vec::new();

    for declaration in children.many(Rule::declaration) {
        lower_declaration(declaration, script)?.append_to(&mut decls);
    }
    children.expect(Rule::EOI)?;
    children.finish()?;

    debug!("lowered {} into {} declarations", script.name, decls.len());
    Ok(Program { decls })
}

fn lower_declaration(pair: Pair<Rule>, script: &Script) -> Mt22Result<Lowered<Decl>> {
    let mut children = Children::of(&pair, script);
    let form = children.next()?;
    let lowered = match form.as_rule() {
        Rule::func_decl => Lowered::Single(Decl::Func(lower_func_decl(form, script)?)),
        Rule::var_decl => lower_var_decl(form, script)?.map(Decl::Var),
        other => return Err(children.violation(format!("unexpected declaration {:?}", other))),
    };
    children.finish()?;
    Ok(lowered)
}

/// `name: function type (params) [inherit parent] { body }`
pub(crate) fn lower_func_decl(pair: Pair<Rule>, script: &Script) -> Mt22Result<FuncDecl> {
    let mut children = Children::of(&pair, script);

    let name = children.expect(Rule::identifier)?.as_str().to_string();
    let return_type = types::lower_func_type(children.expect(Rule::func_type)?, script)?;
    let params = match children.optional(Rule::param_list) {
        Some(list) => lower_param_list(list, script)?,
        None => Vec::new(),
    };
    // A second identifier can only be the inherited function's name.
    let inherit = children
        .optional(Rule::identifier)
        .map(|parent| parent.as_str().to_string());
    let body = stmt::lower_block(children.expect(Rule::block)?, script)?;
    children.finish()?;

    trace!("lowered function {} ({} params)", name, params.len());
    Ok(FuncDecl {
        name,
        return_type,
        params,
        inherit,
        body,
    })
}

fn lower_param_list(pair: Pair<Rule>, script: &Script) -> Mt22Result<Vec<ParamDecl>> {
    let mut children = Children::of(&pair, script);
    let params = children
        .many(Rule::param_decl)
        .into_iter()
        .map(|param| lower_param_decl(param, script))
        .collect::<Mt22Result<Vec<ParamDecl>>>()?;
    children.finish()?;
    Ok(params)
}

/// `[inherit] [out] name: type`
pub(crate) fn lower_param_decl(pair: Pair<Rule>, script: &Script) -> Mt22Result<ParamDecl> {
    let mut children = Children::of(&pair, script);
    let inherit = children.has(Rule::kw_inherit);
    let out = children.has(Rule::kw_out);
    let name = children.expect(Rule::identifier)?.as_str().to_string();
    let ty = types::lower_var_type(children.expect(Rule::var_type)?, script)?;
    children.finish()?;

    Ok(ParamDecl {
        name,
        ty,
        out,
        inherit,
    })
}

/// `a, b, c: type [= x, y, z];` becomes one `VarDecl` per name.
///
/// The type is shared. Initializers are all-or-nothing: with an `=` clause the
/// i-th name takes the i-th expression, without one every entry has none.
pub(crate) fn lower_var_decl(pair: Pair<Rule>, script: &Script) -> Mt22Result<Lowered<VarDecl>> {
    let mut children = Children::of(&pair, script);

    let names = Children::of(&children.expect(Rule::name_list)?, script)
        .many(Rule::identifier)
        .into_iter()
        .map(|name| name.as_str().to_string())
        .collect::<Vec<String>>();
    let ty = types::lower_var_type(children.expect(Rule::var_type)?, script)?;

    let inits = match children.optional(Rule::initializers) {
        Some(list) => {
            let mut exprs = Children::of(&list, script);
            let values = exprs
                .many(Rule::expression)
                .into_iter()
                .map(|expr| lower_expression(expr, script).map(Some))
                .collect::<Mt22Result<Vec<_>>>()?;
            exprs.finish()?;

            if values.len() != names.len() {
                return Err(SyntaxError::with(
                    Level::Error,
                    format!(
                        "Declaration of {} variable(s) has {} initializer(s).",
                        names.len(),
                        values.len()
                    ),
                    "mt22.lower.decl.lower_var_decl".to_string(),
                    rules::get_location_from_pair(&pair, script),
                    rules::get_span_from_pair(&pair, script),
                )
                .into());
            }
            values
        }
        None => vec![None; names.len()],
    };
    children.finish()?;

    Ok(Lowered::Many(
        names
            .into_iter()
            .zip(inits)
            .map(|(name, init)| VarDecl {
                name,
                ty: ty.clone(),
                init,
            })
            .collect(),
    ))
}
