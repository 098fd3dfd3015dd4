use tracing::debug;

use crate::error::Error;
use crate::page::{OrderSpec, PageRequest, PageResult};
use crate::source::PageSource;
use crate::Predicate;

/// Paged fetch with the count-avoidance optimization.
///
/// When the fetched page is shorter than the requested limit *and* carries
/// at least one row (or the window starts at offset 0), it is provably the
/// last page, so the total is `offset + items.len()` and the count query is
/// skipped. A full page proves nothing, and neither does an empty page at a
/// non-zero offset — the window may lie entirely past the last row — so in
/// both cases the count query runs. The returned `total` is identical to
/// what [`paginate_counted`] produces for the same source state; only the
/// number of issued queries differs.
pub async fn paginate<S, T>(
    source: &S,
    predicate: &Predicate,
    order: &OrderSpec,
    request: PageRequest,
) -> Result<PageResult<T>, Error>
where
    S: PageSource<T> + ?Sized,
{
    request.validate()?;
    let offset = request.offset_u64();
    let limit = request.limit_u64();

    let items = source.fetch_page(predicate, order, offset, limit).await?;

    let short_page = (items.len() as u64) < limit;
    let total = if short_page && (!items.is_empty() || offset == 0) {
        debug!(fetched = items.len(), limit, "short page, skipping count");
        offset + items.len() as u64
    } else {
        source.count(predicate).await?
    };

    Ok(PageResult::new(items, total, request))
}

/// Non-optimizing sibling: always issues both the fetch and the count.
/// Serves as the correctness oracle for [`paginate`] in differential tests.
pub async fn paginate_counted<S, T>(
    source: &S,
    predicate: &Predicate,
    order: &OrderSpec,
    request: PageRequest,
) -> Result<PageResult<T>, Error>
where
    S: PageSource<T> + ?Sized,
{
    request.validate()?;

    let items = source
        .fetch_page(predicate, order, request.offset_u64(), request.limit_u64())
        .await?;
    let total = source.count(predicate).await?;

    Ok(PageResult::new(items, total, request))
}
