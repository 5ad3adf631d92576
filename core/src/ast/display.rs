//! Textual dump of the AST.
//!
//! Every node prints as `Kind(field, field, ...)`, e.g.
//! `BinExpr(+, IntegerLit(1), Id(a))`. A program prints one declaration per line.

use std::fmt;

use super::decl::{Decl, FuncDecl, ParamDecl, Program, VarDecl};
use super::expr::{ArrayCell, BinaryOperator, Call, Expr, Lvalue, UnaryOperator};
use super::stmt::{Assign, Block, Stmt};
use super::types::{ArrayType, PrimitiveType, Type};

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program([")?;
        for decl in &self.decls {
            writeln!(f, "\t{}", decl)?;
        }
        write!(f, "])")
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decl::Func(func) => write!(f, "{}", func),
            Decl::Var(var) => write!(f, "{}", var),
        }
    }
}

impl fmt::Display for VarDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.init {
            Some(init) => write!(f, "VarDecl({}, {}, {})", self.name, self.ty, init),
            None => write!(f, "VarDecl({}, {})", self.name, self.ty),
        }
    }
}

impl fmt::Display for ParamDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inherit = if self.inherit { "Inherit" } else { "" };
        let out = if self.out { "Out" } else { "" };
        write!(f, "{}{}Param({}, {})", inherit, out, self.name, self.ty)
    }
}

impl fmt::Display for FuncDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FuncDecl({}, {}, [{}], {}, {})",
            self.name,
            self.return_type,
            join(&self.params),
            self.inherit.as_deref().unwrap_or("None"),
            self.body
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Type::from(*self))
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayType([{}], {})", join(&self.dimensions), self.element)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer => write!(f, "IntegerType"),
            Type::Float => write!(f, "FloatType"),
            Type::String => write!(f, "StringType"),
            Type::Boolean => write!(f, "BooleanType"),
            Type::Auto => write!(f, "AutoType"),
            Type::Void => write!(f, "VoidType"),
            Type::Array(array) => write!(f, "{}", array),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ArrayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayCell({}, [{}])", self.name, join(&self.indices))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Id(name) => write!(f, "Id({})", name),
            Expr::IntegerLit(value) => write!(f, "IntegerLit({})", value),
            // Debug keeps the fractional part, so 0.0 prints as `0.0`.
            Expr::FloatLit(value) => write!(f, "FloatLit({:?})", value),
            Expr::StringLit(value) => write!(f, "StringLit({})", value),
            Expr::BooleanLit(value) => write!(f, "BooleanLit({})", value),
            Expr::ArrayLit(elements) => write!(f, "ArrayLit([{}])", join(elements)),
            Expr::ArrayCell(cell) => write!(f, "{}", cell),
            Expr::FuncCall(Call { name, args }) => write!(f, "FuncCall({}, [{}])", name, join(args)),
            Expr::BinExpr { op, left, right } => write!(f, "BinExpr({}, {}, {})", op, left, right),
            Expr::UnExpr { op, operand } => write!(f, "UnExpr({}, {})", op, operand),
        }
    }
}

impl fmt::Display for Lvalue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lvalue::Id(name) => write!(f, "Id({})", name),
            Lvalue::ArrayCell(cell) => write!(f, "{}", cell),
        }
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssignStmt({}, {})", self.target, self.value)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockStmt([{}])", join(&self.body))
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Block(block) => write!(f, "{}", block),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => match else_branch {
                Some(else_branch) => {
                    write!(f, "IfStmt({}, {}, {})", condition, then_branch, else_branch)
                }
                None => write!(f, "IfStmt({}, {})", condition, then_branch),
            },
            Stmt::While { condition, body } => write!(f, "WhileStmt({}, {})", condition, body),
            Stmt::DoWhile { body, condition } => write!(f, "DoWhileStmt({}, {})", body, condition),
            Stmt::For {
                init,
                condition,
                update,
                body,
            } => write!(f, "ForStmt({}, {}, {}, {})", init, condition, update, body),
            Stmt::Break => write!(f, "BreakStmt()"),
            Stmt::Continue => write!(f, "ContinueStmt()"),
            Stmt::Return(Some(value)) => write!(f, "ReturnStmt({})", value),
            Stmt::Return(None) => write!(f, "ReturnStmt()"),
            Stmt::Call(Call { name, args }) => write!(f, "CallStmt({}, [{}])", name, join(args)),
            Stmt::Assign(assign) => write!(f, "{}", assign),
            Stmt::VarDecl(var) => write!(f, "{}", var),
        }
    }
}
