use sea_orm::FromQueryResult;
use uuid::Uuid;

use crate::domain::model::MemberWithGroup;

/// Projection row produced by the left-joined search select.
#[derive(Debug, FromQueryResult)]
pub struct MemberWithGroupRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub group_id: Option<Uuid>,
    pub group_name: Option<String>,
}

/// Convert a projection row to the domain model
pub fn row_to_domain(row: MemberWithGroupRow) -> MemberWithGroup {
    MemberWithGroup {
        id: row.id,
        name: row.name,
        age: row.age,
        group_id: row.group_id,
        group_name: row.group_name,
    }
}
