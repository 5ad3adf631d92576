//! The MT22 abstract syntax tree.
//!
//! Nodes are plain immutable values built once by `crate::lower` and handed to
//! whatever stage consumes the tree next.

pub mod decl;
pub mod display;
pub mod expr;
pub mod stats;
pub mod stmt;
pub mod types;

pub use decl::{Decl, FuncDecl, ParamDecl, Program, VarDecl};
pub use expr::{ArrayCell, BinaryOperator, Call, Expr, Lvalue, UnaryOperator};
pub use stats::ProgramStats;
pub use stmt::{Assign, Block, Stmt};
pub use types::{ArrayType, PrimitiveType, Type};
