//! Lowering of the pest syntax tree into the MT22 AST.
//!
//! Five passes call each other top-down: declarations, types, statements,
//! expressions and literals. Each is a pure function of the node it is given;
//! the only context threaded through is the `Script`, used to locate errors.

pub mod decl;
pub mod err;
pub mod expr;
pub mod literal;
pub mod stmt;
pub mod types;

pub use decl::lower_program;

/// Result of lowering a construct that may expand into several siblings.
///
/// Function declarations and most statements are `Single`; a variable group
/// such as `a, b: integer;` is `Many`. Callers flatten with `append_to`.
#[derive(Debug, Clone, PartialEq)]
pub enum Lowered<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> Lowered<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Lowered<U> {
        match self {
            Lowered::Single(item) => Lowered::Single(f(item)),
            Lowered::Many(items) => Lowered::Many(items.into_iter().map(f).collect()),
        }
    }

    pub fn append_to(self, out: &mut Vec<T>) {
        match self {
            Lowered::Single(item) => out.push(item),
            Lowered::Many(items) => out.extend(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lowered;

    #[test]
    fn single_and_many_flatten_in_order() {
        let mut out = vec![0];
        Lowered::Single(1).append_to(&mut out);
        Lowered::Many(vec![2, 3]).append_to(&mut out);
        Lowered::Many(Vec::new()).append_to(&mut out);
        Lowered::Single(4).append_to(&mut out);
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn map_keeps_the_shape() {
        assert_eq!(Lowered::Single(2).map(|n| n * 10), Lowered::Single(20));
        assert_eq!(
            Lowered::Many(vec![1, 2]).map(|n| n.to_string()),
            Lowered::Many(vec!["1".to_string(), "2".to_string()])
        );
    }
}
