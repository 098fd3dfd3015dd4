//! Search condition and its predicate composition.

use search_core::ast::{Expr, Value};
use search_core::Predicate;

/// Field names the member search predicate speaks in. The SeaORM adapter
/// registers the same names in its field map, so a composed predicate and
/// an order spec resolve against one whitelist.
pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_AGE: &str = "age";
pub const FIELD_GROUP_NAME: &str = "group_name";

/// Partially-populated search input. An absent field puts no constraint on
/// the result set; it never means "match null". Blank strings count as
/// absent too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub name: Option<String>,
    pub group_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// Compose the combined filter. Each present field yields exactly one
    /// sub-predicate and everything is ANDed; an entirely empty condition
    /// composes to [`Predicate::none`], which matches every row.
    ///
    /// Pure and deterministic. A condition whose bounds contradict each
    /// other (lower above upper) is not an error, it simply matches no
    /// rows.
    pub fn to_predicate(&self) -> Predicate {
        Predicate::all_of([
            self.name_eq(),
            self.group_name_eq(),
            self.age_at_least(),
            self.age_at_most(),
        ])
    }

    fn name_eq(&self) -> Option<Expr> {
        text(self.name.as_deref()).map(|s| Expr::eq(FIELD_NAME, Value::String(s.to_owned())))
    }

    fn group_name_eq(&self) -> Option<Expr> {
        text(self.group_name.as_deref())
            .map(|s| Expr::eq(FIELD_GROUP_NAME, Value::String(s.to_owned())))
    }

    fn age_at_least(&self) -> Option<Expr> {
        self.age_goe
            .map(|age| Expr::ge(FIELD_AGE, Value::Int(age.into())))
    }

    fn age_at_most(&self) -> Option<Expr> {
        self.age_loe
            .map(|age| Expr::le(FIELD_AGE, Value::Int(age.into())))
    }
}

/// A string field counts as present only when it has visible content.
fn text(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}
