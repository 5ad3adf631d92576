use serde::Serialize;

/// Element types an array may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    Integer,
    Float,
    String,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArrayType {
    /// Never empty.
    pub dimensions: Vec<usize>,
    pub element: PrimitiveType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    Integer,
    Float,
    String,
    Boolean,
    /// Resolved later by semantic analysis.
    Auto,
    /// Only valid as a function return type.
    Void,
    Array(ArrayType),
}

impl From<PrimitiveType> for Type {
    fn from(prim: PrimitiveType) -> Self {
        match prim {
            PrimitiveType::Integer => Type::Integer,
            PrimitiveType::Float => Type::Float,
            PrimitiveType::String => Type::String,
            PrimitiveType::Boolean => Type::Boolean,
        }
    }
}

impl Type {
    pub fn array(dimensions: Vec<usize>, element: PrimitiveType) -> Self {
        Type::Array(ArrayType {
            dimensions,
            element,
        })
    }
}
