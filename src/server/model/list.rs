//! Listing primitives shared by every collection: limit/offset pages, ordering and
//! pagination links.

use url::form_urlencoded;

use crate::{model::api::PageQueryDto, server::config::PaginationConfig};

/// Largest window bound the SQLite driver binds as a signed 64-bit integer.
const MAX_WINDOW: u64 = i64::MAX as u64;

/// Resolved limit/offset window of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    /// Applies pagination defaults to the raw query.
    ///
    /// A missing or zero `limit` falls back to the configured page size, and any limit is
    /// capped at the configured maximum. Both bounds are clamped to `i64::MAX`, so an
    /// oversized offset yields an empty page.
    pub fn from_query(query: &PageQueryDto, config: PaginationConfig) -> Self {
        let limit = query
            .limit
            .filter(|limit| *limit > 0)
            .map(|limit| limit.min(config.max_page_size))
            .unwrap_or(config.page_size);

        Self {
            limit: limit.min(MAX_WINDOW),
            offset: query.offset.unwrap_or(0).min(MAX_WINDOW),
        }
    }
}

/// One page of a listing plus the total number of matching rows.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// Link to the following page, `None` on the last page.
    ///
    /// # Arguments
    /// - `collection_url` - Absolute URL of the collection without a query string
    /// - `raw_query` - Query string of the current request; parameters other than
    ///   `limit` and `offset` are carried over
    pub fn next_url(&self, collection_url: &str, raw_query: Option<&str>) -> Option<String> {
        let PageRequest { limit, offset } = self.request;

        if offset.saturating_add(limit) >= self.total {
            return None;
        }

        Some(page_url(
            collection_url,
            raw_query,
            limit,
            Some(offset + limit),
        ))
    }

    /// Link to the preceding page, `None` on the first page.
    ///
    /// The first page is linked without an `offset` parameter.
    pub fn previous_url(&self, collection_url: &str, raw_query: Option<&str>) -> Option<String> {
        let PageRequest { limit, offset } = self.request;

        if offset == 0 {
            return None;
        }

        let previous = offset.saturating_sub(limit);
        Some(page_url(
            collection_url,
            raw_query,
            limit,
            (previous > 0).then_some(previous),
        ))
    }
}

fn page_url(collection_url: &str, raw_query: Option<&str>, limit: u64, offset: Option<u64>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes()) {
        if key != "limit" && key != "offset" {
            serializer.append_pair(&key, &value);
        }
    }

    serializer.append_pair("limit", &limit.to_string());
    if let Some(offset) = offset {
        serializer.append_pair("offset", &offset.to_string());
    }

    format!("{}?{}", collection_url, serializer.finish())
}

/// One term of an `ordering` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: F,
    pub descending: bool,
}

impl<F> OrderBy<F> {
    pub fn asc(field: F) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            descending: true,
        }
    }
}

/// Parses `ordering=field,-field`.
///
/// Terms naming a field `resolve` does not recognize are skipped.
pub fn parse_ordering<F>(raw: Option<&str>, resolve: impl Fn(&str) -> Option<F>) -> Vec<OrderBy<F>> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .filter_map(|term| match term.strip_prefix('-') {
            Some(name) => resolve(name).map(OrderBy::desc),
            None => resolve(term).map(OrderBy::asc),
        })
        .collect()
}

/// Trims a text filter and drops it when empty.
pub fn text_filter(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
