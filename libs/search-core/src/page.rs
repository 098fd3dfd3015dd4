use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Requested page window. Fields are raw caller input; [`validate`] rejects
/// negative offsets and non-positive limits before any query is issued.
///
/// [`validate`]: PageRequest::validate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.offset < 0 {
            return Err(Error::invalid_request(format!(
                "offset must be non-negative, got {}",
                self.offset
            )));
        }
        if self.limit <= 0 {
            return Err(Error::invalid_request(format!(
                "limit must be positive, got {}",
                self.limit
            )));
        }
        Ok(())
    }

    /// Only call on a validated request.
    pub(crate) fn offset_u64(&self) -> u64 {
        self.offset as u64
    }

    pub(crate) fn limit_u64(&self) -> u64 {
        self.limit as u64
    }
}

/// One page of results plus the total match count across all pages.
/// `total` is the count before paging, never the size of this page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// Whether rows exist past this window.
    pub fn has_more(&self) -> bool {
        self.request.offset as u64 + (self.items.len() as u64) < self.total
    }

    /// Map items while preserving total and request (domain -> DTO mapping
    /// convenience).
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(&mut f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderKey {
    pub field: String,
    pub dir: SortDir,
}

/// Ordering applied to the page fetch. Callers must supply one that is
/// stable and deterministic for the count-avoidance arithmetic to be
/// meaningful across repeated calls; ordering by a unique key is the usual
/// way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec(pub Vec<OrderKey>);

impl OrderSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self(Vec::new()).then_asc(field)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self(Vec::new()).then_desc(field)
    }

    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.0.push(OrderKey {
            field: field.into(),
            dir: SortDir::Asc,
        });
        self
    }

    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.0.push(OrderKey {
            field: field.into(),
            dir: SortDir::Desc,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
