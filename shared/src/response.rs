//! API Response types
//!
//! List endpoints return a page envelope:
//! ```json
//! {
//!     "data": [ ... ],
//!     "links": { "first": "...", "last": "...", "prev": null, "next": "..." },
//!     "meta": { "current_page": 1, "last_page": 3, "per_page": 25,
//!               "from": 1, "to": 25, "total": 61 }
//! }
//! ```
//! Single-entity endpoints return either the bare entity or `{ "data": T }`.

use serde::{Deserialize, Serialize};

/// Navigation links of a page envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Pagination metadata of a page envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number (1-based)
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    /// 1-based index of the first item on the page, `null` on an empty page
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
    pub total: u64,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: 0,
            from: None,
            to: None,
            total: 0,
        }
    }
}

impl PageMeta {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: PageLinks,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

fn page_size(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl<T> Paginated<T> {
    /// Metadata of the page; endpoints that skip `meta` are treated as a
    /// single page holding every item.
    pub fn meta(&self) -> PageMeta {
        self.meta.clone().unwrap_or_else(|| {
            let len = self.data.len() as u64;
            PageMeta {
                current_page: 1,
                last_page: 1,
                per_page: page_size(self.data.len()),
                from: (len > 0).then_some(1),
                to: (len > 0).then_some(len),
                total: len,
            }
        })
    }
}

/// Single-entity body, wrapped or not
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> DataEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            DataEnvelope::Wrapped { data } => data,
            DataEnvelope::Bare(data) => data,
        }
    }
}
