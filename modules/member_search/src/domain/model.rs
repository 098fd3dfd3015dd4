use uuid::Uuid;

/// Flattened member row with its (optional) group, as produced by the
/// left-joined search projection. Members without a group keep `None` in
/// both group fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberWithGroup {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub group_id: Option<Uuid>,
    pub group_name: Option<String>,
}
