use std::sync::Arc;

use search_core::{PageRequest, PageResult};
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::MemberWithGroup;
use crate::domain::repo::MembersRepository;
use crate::domain::search::MemberSearchCondition;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 1000,
        }
    }
}

/// Domain service for member search.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn MembersRepository>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(repo: Arc<dyn MembersRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// A first-page request sized by the configured default.
    pub fn first_page(&self) -> PageRequest {
        PageRequest::new(0, self.config.default_page_size)
    }

    #[instrument(name = "member_search.service.search", skip(self, condition))]
    pub async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberWithGroup>, DomainError> {
        debug!("searching members");
        let rows = self
            .repo
            .search(condition)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!(matched = rows.len(), "search finished");
        Ok(rows)
    }

    #[instrument(name = "member_search.service.search_page", skip(self, condition))]
    pub async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<PageResult<MemberWithGroup>, DomainError> {
        let request = self.clamp(request);
        let page = self.repo.search_page(condition, request).await?;
        debug!(items = page.items.len(), total = page.total, "page fetched");
        Ok(page)
    }

    #[instrument(name = "member_search.service.search_page_counted", skip(self, condition))]
    pub async fn search_page_counted(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<PageResult<MemberWithGroup>, DomainError> {
        let request = self.clamp(request);
        let page = self.repo.search_page_counted(condition, request).await?;
        debug!(items = page.items.len(), total = page.total, "page fetched");
        Ok(page)
    }

    /// Cap the window size; offset and non-positive limits are left for the
    /// page validation to reject.
    fn clamp(&self, mut request: PageRequest) -> PageRequest {
        if request.limit > self.config.max_page_size {
            request.limit = self.config.max_page_size;
        }
        request
    }
}
