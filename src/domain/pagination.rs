//! Pure pagination over in-memory sequences.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default page when the caller supplies none (or an unparseable one).
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size, matching the 12-card grid the API was built for.
pub const DEFAULT_LIMIT: u32 = 12;

/// Position of a page within a paginated result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

/// One page slice plus its pagination descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PaginationInfo,
}

/// Returns `items[(page-1)*limit .. (page-1)*limit + limit]` with natural
/// clamping: an out-of-range `page` yields an empty slice, never an error.
///
/// `page` is reported back as supplied, not clamped to `[1, total_pages]`.
/// `limit == 0` yields an empty page with `total_pages == 0`; the HTTP layer
/// never passes 0 (it falls back to [`DEFAULT_LIMIT`]).
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> Page<T> {
    let total_items = items.len() as u64;
    let total_pages = if limit == 0 {
        0
    } else {
        total_items.div_ceil(limit as u64) as u32
    };
    let skip = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    let items = items
        .into_iter()
        .skip(skip)
        .take(limit as usize)
        .collect();

    Page {
        items,
        info: PaginationInfo {
            current_page: page,
            total_pages,
            total_items,
            items_per_page: limit,
        },
    }
}
