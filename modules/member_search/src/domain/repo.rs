use async_trait::async_trait;
use search_core::{Error, PageRequest, PageResult};

use crate::domain::model::MemberWithGroup;
use crate::domain::search::MemberSearchCondition;

/// Port for the domain layer: the search reads the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait MembersRepository: Send + Sync {
    /// Every matching row in stable order, no paging.
    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> anyhow::Result<Vec<MemberWithGroup>>;

    /// Paged search that always issues the count query.
    async fn search_page_counted(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<PageResult<MemberWithGroup>, Error>;

    /// Paged search that skips the count query whenever the fetched page is
    /// provably the last one.
    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<PageResult<MemberWithGroup>, Error>;
}
