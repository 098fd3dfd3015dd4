//! SeaORM-backed repository implementation for the member search port.
//!
//! Generic over `C: ConnectionTrait`, so it can be constructed with a
//! `DatabaseConnection` **or** a transactional connection. One base select
//! (projection + left join + lowered condition) feeds both the page fetch
//! and the count, so both sides observe the predicate against the same
//! join shape.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QuerySelect,
    RelationTrait, Select,
};
use search_core::{
    paginate, paginate_counted, Error, OrderSpec, PageRequest, PageResult, PageSource, Predicate,
};
use search_db::{apply_order, condition_from_predicate, FieldKind, FieldMap, FilterBuildResult};

use crate::domain::model::MemberWithGroup;
use crate::domain::repo::MembersRepository;
use crate::domain::search::{
    MemberSearchCondition, FIELD_AGE, FIELD_GROUP_NAME, FIELD_ID, FIELD_NAME,
};
use crate::infra::storage::entity::{group, member};
use crate::infra::storage::mapper::{row_to_domain, MemberWithGroupRow};

pub struct SeaOrmMembersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
    fields: FieldMap,
}

impl<C> SeaOrmMembersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        // Every column registers table-qualified: after the left join to
        // groups, bare `id`/`name` would be ambiguous.
        let fields = FieldMap::new()
            .insert(FIELD_ID, (member::Entity, member::Column::Id), FieldKind::Uuid)
            .insert(
                FIELD_NAME,
                (member::Entity, member::Column::Name),
                FieldKind::String,
            )
            .insert(
                FIELD_AGE,
                (member::Entity, member::Column::Age),
                FieldKind::I64,
            )
            .insert(
                FIELD_GROUP_NAME,
                (group::Entity, group::Column::Name),
                FieldKind::String,
            );
        Self { conn, fields }
    }

    /// Joined select filtered by the lowered predicate. Both the page fetch
    /// and the count derive from this one query.
    fn base_select(&self, predicate: &Predicate) -> FilterBuildResult<Select<member::Entity>> {
        let cond = condition_from_predicate(predicate, &self.fields)?;
        Ok(member::Entity::find()
            .join(JoinType::LeftJoin, member::Relation::Group.def())
            .filter(cond))
    }

    fn page_select(&self, predicate: &Predicate) -> FilterBuildResult<Select<member::Entity>> {
        Ok(self
            .base_select(predicate)?
            .select_only()
            .column(member::Column::Id)
            .column(member::Column::Name)
            .column(member::Column::Age)
            .column(member::Column::GroupId)
            .column_as(group::Column::Name, "group_name"))
    }

    /// Members have unique ids, so this ordering is stable across repeated
    /// reads of unchanged data.
    fn default_order() -> OrderSpec {
        OrderSpec::asc(FIELD_ID)
    }
}

#[async_trait]
impl<C> PageSource<MemberWithGroup> for SeaOrmMembersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn fetch_page(
        &self,
        predicate: &Predicate,
        order: &OrderSpec,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<MemberWithGroup>> {
        let select = apply_order(self.page_select(predicate)?, order, &self.fields)?;
        let rows = select
            .offset(offset)
            .limit(limit)
            .into_model::<MemberWithGroupRow>()
            .all(&self.conn)
            .await
            .context("member page fetch failed")?;
        Ok(rows.into_iter().map(row_to_domain).collect())
    }

    async fn count(&self, predicate: &Predicate) -> anyhow::Result<u64> {
        let total = self
            .base_select(predicate)?
            .count(&self.conn)
            .await
            .context("member count failed")?;
        Ok(total)
    }
}

#[async_trait]
impl<C> MembersRepository for SeaOrmMembersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> anyhow::Result<Vec<MemberWithGroup>> {
        let predicate = condition.to_predicate();
        let select = apply_order(
            self.page_select(&predicate)?,
            &Self::default_order(),
            &self.fields,
        )?;
        let rows = select
            .into_model::<MemberWithGroupRow>()
            .all(&self.conn)
            .await
            .context("member search failed")?;
        Ok(rows.into_iter().map(row_to_domain).collect())
    }

    async fn search_page_counted(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<PageResult<MemberWithGroup>, Error> {
        let predicate = condition.to_predicate();
        paginate_counted(self, &predicate, &Self::default_order(), request).await
    }

    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<PageResult<MemberWithGroup>, Error> {
        let predicate = condition.to_predicate();
        paginate(self, &predicate, &Self::default_order(), request).await
    }
}
