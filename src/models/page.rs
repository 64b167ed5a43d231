//! Pagination types shared by the repositories and services.

use serde::{Deserialize, Serialize};

// == Page Request ==
/// A 1-based page position. Construction clamps both fields to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(number: i64, size: i64) -> Self {
        Self {
            number: clamp_positive(number),
            size: clamp_positive(size),
        }
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> usize {
        (self.number as usize - 1).saturating_mul(self.size as usize)
    }
}

fn clamp_positive(value: i64) -> u32 {
    value.clamp(1, u32::MAX as i64) as u32
}

// == Page ==
/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Slices one page out of an already filtered, ordered sequence.
    pub fn slice(matches: Vec<T>, request: PageRequest) -> Self {
        let total_count = matches.len() as u64;
        let items = matches
            .into_iter()
            .skip(request.offset())
            .take(request.size as usize)
            .collect();

        Self {
            items,
            total_count,
            page_number: request.number,
            page_size: request.size,
        }
    }
}

// == Product Filter ==
/// Optional filters for paged product queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Substring of name or description, case-insensitive
    pub search: Option<String>,
    /// Owning category; `0` means no filter
    pub category_id: Option<i64>,
}

impl ProductFilter {
    /// Drops blank search terms and the `0` category sentinel.
    pub fn normalized(self) -> Self {
        Self {
            search: self.search.filter(|term| !term.trim().is_empty()),
            category_id: self.category_id.filter(|id| *id != 0),
        }
    }
}
