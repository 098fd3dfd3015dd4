//! Member search module: dynamic filter + paginated search over members
//! joined to their groups.
//!
//! The domain layer owns the search condition and its predicate
//! composition; the infra layer lowers the predicate to SeaORM and serves
//! the page fetch and count from one shared select.

pub mod domain;
pub mod infra;

pub use domain::model::MemberWithGroup;
pub use domain::search::MemberSearchCondition;
