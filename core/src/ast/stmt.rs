use serde::Serialize;

use super::decl::VarDecl;
use super::expr::{Call, Expr, Lvalue};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub body: Vec<Stmt>,
}

/// `target = value`, also used as the init clause of `for`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    pub target: Lvalue,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    Block(Block),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Block,
        condition: Expr,
    },
    For {
        init: Assign,
        condition: Expr,
        update: Expr,
        body: Box<Stmt>,
    },
    Break,
    Continue,
    Return(Option<Expr>),
    Call(Call),
    Assign(Assign),
    /// A local variable; one per name of the source declaration.
    VarDecl(VarDecl),
}
