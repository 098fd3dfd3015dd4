//! Core types for dynamic filter composition and offset pagination.
//!
//! A `Predicate` is built once per search invocation from whatever optional
//! inputs the caller supplied, then handed as a single immutable value to
//! both the page fetch and the count operation of a [`PageSource`]. The
//! paginate functions in [`fetch`] layer the count-avoidance policy on top.

pub mod ast {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Expr {
        And(Box<Expr>, Box<Expr>),
        Or(Box<Expr>, Box<Expr>),
        Not(Box<Expr>),
        Compare(Box<Expr>, CompareOperator, Box<Expr>),
        Identifier(String),
        Value(Value),
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum CompareOperator {
        Eq,
        Ne,
        Gt,
        Ge,
        Lt,
        Le,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub enum Value {
        Null,
        Bool(bool),
        Int(i64),
        Uuid(Uuid),
        DateTime(DateTime<Utc>),
        String(String),
    }

    impl Expr {
        /// `field <op> literal`, the shape every composed sub-predicate has.
        pub fn compare(field: impl Into<String>, op: CompareOperator, value: Value) -> Self {
            Expr::Compare(
                Box::new(Expr::Identifier(field.into())),
                op,
                Box::new(Expr::Value(value)),
            )
        }

        pub fn eq(field: impl Into<String>, value: Value) -> Self {
            Self::compare(field, CompareOperator::Eq, value)
        }

        pub fn ge(field: impl Into<String>, value: Value) -> Self {
            Self::compare(field, CompareOperator::Ge, value)
        }

        pub fn le(field: impl Into<String>, value: Value) -> Self {
            Self::compare(field, CompareOperator::Le, value)
        }

        pub fn and(self, other: Expr) -> Expr {
            Expr::And(Box::new(self), Box::new(other))
        }

        pub fn or(self, other: Expr) -> Expr {
            Expr::Or(Box::new(self), Box::new(other))
        }

        pub fn not(self) -> Expr {
            Expr::Not(Box::new(self))
        }
    }
}

mod error;
mod fetch;
mod page;
mod source;

pub use error::Error;
pub use fetch::{paginate, paginate_counted};
pub use page::{OrderKey, OrderSpec, PageRequest, PageResult, SortDir};
pub use source::PageSource;

/// A combined filter over entity fields. `None` means "no constraint":
/// every row matches. Constructed fresh per search call and passed by
/// reference to both the fetch and the count side of a [`PageSource`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predicate(pub Option<Box<ast::Expr>>);

impl Predicate {
    pub fn none() -> Self {
        Self(None)
    }
    pub fn some(expr: ast::Expr) -> Self {
        Self(Some(Box::new(expr)))
    }
    pub fn as_ast(&self) -> Option<&ast::Expr> {
        self.0.as_deref()
    }
    pub fn into_ast(self) -> Option<ast::Expr> {
        self.0.map(|b| *b)
    }
    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Conjunction with `none` as the identity element.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self.into_ast(), other.into_ast()) {
            (Some(a), Some(b)) => Predicate::some(a.and(b)),
            (Some(a), None) | (None, Some(a)) => Predicate::some(a),
            (None, None) => Predicate::none(),
        }
    }

    /// AND together the parts that are present. Absent parts contribute
    /// nothing; if every part is absent the result matches every row.
    pub fn all_of(parts: impl IntoIterator<Item = Option<ast::Expr>>) -> Predicate {
        parts
            .into_iter()
            .flatten()
            .fold(Predicate::none(), |acc, e| acc.and(Predicate::some(e)))
    }
}

impl From<Option<ast::Expr>> for Predicate {
    fn from(opt: Option<ast::Expr>) -> Self {
        match opt {
            Some(e) => Predicate::some(e),
            None => Predicate::none(),
        }
    }
}

#[cfg(test)]
mod tests;
