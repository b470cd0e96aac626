use serde::{Deserialize, Serialize};

use crate::params::PageParams;
use crate::{PARAM_PAGE_LIMIT, PARAM_PAGE_OFFSET};

/// Navigation links for a page of results.
///
/// `last` is never populated: computing it would need the total item count,
/// which this crate deliberately does not obtain. Absent links are omitted
/// when the struct is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    /// Link to the first page. Always present.
    pub first: String,
    /// Link to the previous page, when the current offset is past zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Link to the next page, when the sentinel row showed one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Link to the last page. Never computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// A page of items together with its navigation links, ready for
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page, at most `limit` of them.
    pub data: Vec<T>,
    /// Navigation links derived from the request parameters.
    pub links: PageLinks,
}

/// Builds a paginated response from an over-fetched result set.
///
/// `items` is expected to hold up to `limit + 1` rows, as produced by a
/// query using [`PageParams::sql_fragment`]. When the extra sentinel row is
/// present it is dropped from the data and a `next` link is emitted; when
/// it is not, the current page is the last one. A `prev` link is emitted
/// whenever the offset is past zero, with the previous offset clamped at
/// zero.
///
/// ```rust
/// use limit_offset::{paginate, PageParams};
///
/// let params = PageParams { limit: 5, offset: 0, sort: vec![] };
/// let page = paginate(vec!["a", "b", "c", "d", "e", "f"], "/sample", &params);
/// assert_eq!(page.data, vec!["a", "b", "c", "d", "e"]);
/// assert_eq!(page.links.first, "/sample?page[limit]=5&page[offset]=0");
/// assert_eq!(
///     page.links.next.as_deref(),
///     Some("/sample?page[limit]=5&page[offset]=5"),
/// );
/// assert!(page.links.prev.is_none());
/// ```
pub fn paginate<T>(items: Vec<T>, base_path: &str, params: &PageParams) -> PageResponse<T> {
    let has_more = items.len() > params.limit;
    let mut data = items;
    if has_more {
        // Drop the sentinel row; it belongs to the next page.
        data.pop();
    }
    PageResponse {
        data,
        links: build_links(base_path, params, has_more),
    }
}

fn build_links(base_path: &str, params: &PageParams, has_more: bool) -> PageLinks {
    let sort_query = params.sort_query();
    let first = page_link(base_path, params.limit, 0, &sort_query);
    let next = has_more
        .then(|| page_link(base_path, params.limit, params.offset + params.limit, &sort_query));
    let prev = (params.offset > 0).then(|| {
        page_link(
            base_path,
            params.limit,
            params.offset.saturating_sub(params.limit),
            &sort_query,
        )
    });
    PageLinks {
        first,
        prev,
        next,
        last: None,
    }
}

/// Formats one navigation link. The parameter names are written literally
/// (brackets unescaped), matching what the extractor accepts.
fn page_link(base_path: &str, limit: usize, offset: usize, sort_query: &str) -> String {
    let mut link = format!(
        "{}?{}={}&{}={}",
        base_path, PARAM_PAGE_LIMIT, limit, PARAM_PAGE_OFFSET, offset
    );
    if !sort_query.is_empty() {
        link.push('&');
        link.push_str(sort_query);
    }
    link
}
