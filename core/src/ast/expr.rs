//! Expression nodes and the fixed operator table.

use serde::Serialize;

/// Binary operators, loosest tier first. Serialized as their source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "::")]
    Concat,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Mod,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "::" => BinaryOperator::Concat,
            "==" => BinaryOperator::Eq,
            "!=" => BinaryOperator::Ne,
            "<" => BinaryOperator::Lt,
            "<=" => BinaryOperator::Le,
            ">" => BinaryOperator::Gt,
            ">=" => BinaryOperator::Ge,
            "&&" => BinaryOperator::And,
            "||" => BinaryOperator::Or,
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Sub,
            "*" => BinaryOperator::Mul,
            "/" => BinaryOperator::Div,
            "%" => BinaryOperator::Mod,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Concat => "::",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "-")]
    Neg,
}

impl UnaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(UnaryOperator::Not),
            "-" => Some(UnaryOperator::Neg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::Neg => "-",
        }
    }
}

/// Indexed access into an array variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayCell {
    pub name: String,
    /// Never empty.
    pub indices: Vec<Expr>,
}

/// `name(args)`, shared by call expressions and call statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Id(String),
    IntegerLit(i64),
    FloatLit(f64),
    StringLit(String),
    BooleanLit(bool),
    ArrayLit(Vec<Expr>),
    ArrayCell(ArrayCell),
    FuncCall(Call),
    BinExpr {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    UnExpr {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
}

impl Expr {
    pub fn id(name: &str) -> Self {
        Expr::Id(name.to_string())
    }

    pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::BinExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOperator, operand: Expr) -> Self {
        Expr::UnExpr {
            op,
            operand: Box::new(operand),
        }
    }
}

/// The only two expression forms an assignment may target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Lvalue {
    Id(String),
    ArrayCell(ArrayCell),
}

impl From<Lvalue> for Expr {
    fn from(target: Lvalue) -> Self {
        match target {
            Lvalue::Id(name) => Expr::Id(name),
            Lvalue::ArrayCell(cell) => Expr::ArrayCell(cell),
        }
    }
}
