//! `search-core` predicate → `sea_orm::Condition` lowering (AST in, SQL out).
//!
//! Predicate construction belongs to the domain layer; this crate only
//! consumes [`search_core::ast::Expr`] against a whitelist of columns. The
//! whitelist maps API field names to fully qualified column references, so
//! columns of a joined entity register the same way as columns of the
//! primary one.

use std::collections::HashMap;

use sea_orm::sea_query::{ColumnRef, Expr as SqlExpr, IntoColumnRef, Order, SimpleExpr};
use sea_orm::{Condition, EntityTrait, Select};
use search_core::ast::{self, CompareOperator};
use search_core::{OrderSpec, Predicate, SortDir};
use thiserror::Error;

/// Whitelisted field kind, used to coerce [`ast::Value`] into
/// [`sea_orm::Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    I64,
    Bool,
    Uuid,
    DateTimeUtc,
}

#[derive(Clone)]
pub struct Field {
    pub col: ColumnRef,
    pub kind: FieldKind,
}

/// API field name → column whitelist. Lookup is case-insensitive.
#[derive(Clone, Default)]
pub struct FieldMap {
    map: HashMap<String, Field>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register a field. `col` accepts a plain entity column or an
    /// `(Entity, Column)` pair for joined tables.
    pub fn insert(
        mut self,
        api_name: impl Into<String>,
        col: impl IntoColumnRef,
        kind: FieldKind,
    ) -> Self {
        self.map.insert(
            api_name.into().to_lowercase(),
            Field {
                col: col.into_column_ref(),
                kind,
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.map.get(&name.to_lowercase())
    }
}

#[derive(Debug, Error, Clone)]
pub enum FilterBuildError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("type mismatch: expected {expected:?}, got {got}")]
    TypeMismatch {
        expected: FieldKind,
        got: &'static str,
    },

    #[error("unsupported comparison shape, expected field <op> literal")]
    UnsupportedCompare,

    #[error("bare identifier not allowed: {0}")]
    BareIdentifier(String),

    #[error("bare literal not allowed")]
    BareLiteral,
}

pub type FilterBuildResult<T> = Result<T, FilterBuildError>;

fn value_kind_name(v: &ast::Value) -> &'static str {
    match v {
        ast::Value::Null => "null",
        ast::Value::Bool(_) => "bool",
        ast::Value::Int(_) => "int",
        ast::Value::Uuid(_) => "uuid",
        ast::Value::DateTime(_) => "datetime",
        ast::Value::String(_) => "string",
    }
}

fn coerce(kind: FieldKind, v: &ast::Value) -> FilterBuildResult<sea_orm::Value> {
    use ast::Value as V;
    Ok(match (kind, v) {
        (FieldKind::String, V::String(s)) => sea_orm::Value::String(Some(Box::new(s.clone()))),
        (FieldKind::I64, V::Int(i)) => sea_orm::Value::BigInt(Some(*i)),
        (FieldKind::Bool, V::Bool(b)) => sea_orm::Value::Bool(Some(*b)),
        (FieldKind::Uuid, V::Uuid(u)) => sea_orm::Value::Uuid(Some(Box::new(*u))),
        (FieldKind::DateTimeUtc, V::DateTime(dt)) => {
            sea_orm::Value::ChronoDateTimeUtc(Some(Box::new(*dt)))
        }
        (expected, got) => {
            return Err(FilterBuildError::TypeMismatch {
                expected,
                got: value_kind_name(got),
            })
        }
    })
}

/// Lower a predicate to a `Condition`. An empty predicate lowers to
/// `Condition::all()` with no clauses: every row matches, no WHERE is
/// emitted.
pub fn condition_from_predicate(
    predicate: &Predicate,
    fields: &FieldMap,
) -> FilterBuildResult<Condition> {
    match predicate.as_ast() {
        None => Ok(Condition::all()),
        Some(expr) => lower(expr, fields),
    }
}

fn lower(expr: &ast::Expr, fields: &FieldMap) -> FilterBuildResult<Condition> {
    use ast::Expr as E;
    match expr {
        E::And(a, b) => Ok(Condition::all()
            .add(lower(a, fields)?)
            .add(lower(b, fields)?)),
        E::Or(a, b) => Ok(Condition::any()
            .add(lower(a, fields)?)
            .add(lower(b, fields)?)),
        E::Not(x) => Ok(lower(x, fields)?.not()),
        E::Compare(l, op, r) => {
            lower_compare(l, *op, r, fields).map(|e| Condition::all().add(e))
        }
        E::Identifier(name) => Err(FilterBuildError::BareIdentifier(name.clone())),
        E::Value(_) => Err(FilterBuildError::BareLiteral),
    }
}

fn lower_compare(
    lhs: &ast::Expr,
    op: CompareOperator,
    rhs: &ast::Expr,
    fields: &FieldMap,
) -> FilterBuildResult<SimpleExpr> {
    let (name, value) = match (lhs, rhs) {
        (ast::Expr::Identifier(n), ast::Expr::Value(v)) => (n, v),
        _ => return Err(FilterBuildError::UnsupportedCompare),
    };
    let field = fields
        .get(name)
        .ok_or_else(|| FilterBuildError::UnknownField(name.clone()))?;
    let v = coerce(field.kind, value)?;
    let col = SqlExpr::col(field.col.clone());

    Ok(match op {
        CompareOperator::Eq => col.eq(v),
        CompareOperator::Ne => col.ne(v),
        CompareOperator::Gt => col.gt(v),
        CompareOperator::Ge => col.gte(v),
        CompareOperator::Lt => col.lt(v),
        CompareOperator::Le => col.lte(v),
    })
}

/// Apply an order spec to a select, resolving field names through the same
/// whitelist the filter uses.
pub fn apply_order<E: EntityTrait>(
    mut select: Select<E>,
    order: &OrderSpec,
    fields: &FieldMap,
) -> FilterBuildResult<Select<E>> {
    use sea_orm::QueryOrder;

    for key in &order.0 {
        let field = fields
            .get(&key.field)
            .ok_or_else(|| FilterBuildError::UnknownField(key.field.clone()))?;
        let dir = match key.dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        select = select.order_by(SimpleExpr::Column(field.col.clone()), dir);
    }
    Ok(select)
}
