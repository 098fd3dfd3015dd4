use async_trait::async_trait;

use crate::page::OrderSpec;
use crate::Predicate;

/// Read side required from a data-source collaborator.
///
/// Invariant both paginate functions depend on: a row matches `fetch_page`
/// under a given predicate if and only if `count` counts it under the same
/// predicate. Implementations should derive both queries from one shared
/// base (same joins, same condition), never rebuild the filter per call.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Rows matching the predicate within the window, in the order given by
    /// `order`. The order must be reproducible across calls against
    /// unchanged data.
    async fn fetch_page(
        &self,
        predicate: &Predicate,
        order: &OrderSpec,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<T>>;

    /// Number of rows matching the predicate across all pages.
    async fn count(&self, predicate: &Predicate) -> anyhow::Result<u64>;
}
