use serde::Serialize;

use super::expr::Expr;
use super::stmt::Block;
use super::types::Type;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Decl {
    Func(FuncDecl),
    Var(VarDecl),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    pub name: String,
    pub ty: Type,
    pub init: Option<Expr>,
}

/// `out` and `inherit` are independent; both may be set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamDecl {
    pub name: String,
    pub ty: Type,
    pub out: bool,
    pub inherit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuncDecl {
    pub name: String,
    pub return_type: Type,
    pub params: Vec<ParamDecl>,
    /// Name of the function this one inherits from.
    pub inherit: Option<String>,
    pub body: Block,
}
