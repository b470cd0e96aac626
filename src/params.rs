use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ParamError;
use crate::{PARAM_PAGE_LIMIT, PARAM_PAGE_OFFSET, PARAM_SORT};

/// A single `ORDER BY` entry: a column name and a direction.
///
/// The direction is kept as a free-form string (`asc`, `desc`, or whatever
/// the client sent); it is embedded verbatim by
/// [`PageParams::sql_fragment`]. Validating directions and column names
/// against the schema is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Column to sort by.
    pub field: String,
    /// Sort direction, normally `asc` or `desc`.
    pub order: String,
}

/// Pagination parameters gathered from a request.
///
/// Built once per request by [`extract_params`] and read by both the SQL
/// fragment renderer and [`paginate`](crate::paginate). Sort entries keep
/// their request order, which fixes the multi-column `ORDER BY` precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Maximum number of items the page should contain.
    pub limit: usize,
    /// Number of items to skip from the start of the result set.
    pub offset: usize,
    /// Requested sort order, highest precedence first.
    pub sort: Vec<Sort>,
}

impl PageParams {
    /// Renders the trailing SQL fragment for the data query.
    ///
    /// The fragment requests `limit + 1` rows: the extra row is a sentinel
    /// that tells [`paginate`](crate::paginate) whether a next page exists,
    /// so no count query is needed. Field and direction strings are
    /// interpolated as-is, without quoting or escaping.
    ///
    /// ```rust
    /// use limit_offset::PageParams;
    ///
    /// let params = PageParams { limit: 10, offset: 20, sort: vec![] };
    /// assert_eq!(params.sql_fragment(), " LIMIT 11 OFFSET 20 ");
    /// ```
    pub fn sql_fragment(&self) -> String {
        let mut query = format!(" LIMIT {} OFFSET {} ", self.limit + 1, self.offset);
        if !self.sort.is_empty() {
            let columns: Vec<String> = self
                .sort
                .iter()
                .map(|s| format!("{} {}", s.field, s.order))
                .collect();
            query.push_str("ORDER BY ");
            query.push_str(&columns.join(","));
        }
        query
    }

    /// Renders the sort entries back into a `sort=` query parameter.
    ///
    /// Returns the empty string when there are no sort entries. This is the
    /// inverse of the `sort` parsing in [`extract_params`]: feeding the
    /// output back through extraction reproduces the same entries, as long
    /// as fields and directions contain no `,` or `.`.
    pub fn sort_query(&self) -> String {
        if self.sort.is_empty() {
            return String::new();
        }
        let tokens: Vec<String> = self
            .sort
            .iter()
            .map(|s| format!("{}.{}", s.field, s.order))
            .collect();
        format!("{}={}", PARAM_SORT, tokens.join(","))
    }
}

/// Extracts pagination parameters from a request URL.
///
/// `request_url` may be an absolute URL, a root-relative path, or a bare
/// query string. Query pairs are read percent-decoded, so
/// `page%5Blimit%5D=5` and `page[limit]=5` are equivalent; when a parameter
/// repeats, the first occurrence wins.
///
/// `page[limit]` and `page[offset]` must parse as non-negative integers
/// when present; absent (or empty) values fall back to the caller-supplied
/// defaults, which are not validated further. On a parse failure the
/// returned [`ParamError`] carries the parameter set assembled so far, so
/// the caller can still proceed with defaults if it wants to.
///
/// The `sort` parameter is split on commas into `field.direction` tokens.
/// Tokens that do not split on a period into exactly two parts are
/// discarded; well-formed tokens around them are kept in request order.
///
/// ```rust
/// use limit_offset::extract_params;
///
/// let params = extract_params("/users?page[offset]=30", 0, 25)?;
/// assert_eq!(params.limit, 25);
/// assert_eq!(params.offset, 30);
/// # Ok::<(), limit_offset::ParamError>(())
/// ```
pub fn extract_params(
    request_url: &str,
    default_offset: usize,
    default_limit: usize,
) -> Result<PageParams, ParamError> {
    let mut params = PageParams {
        limit: default_limit,
        offset: default_offset,
        sort: Vec::new(),
    };

    let query = query_string_of(request_url);
    let mut limit = None;
    let mut offset = None;
    let mut sort = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PARAM_PAGE_LIMIT if limit.is_none() && !value.is_empty() => {
                limit = Some(value.into_owned());
            }
            PARAM_PAGE_OFFSET if offset.is_none() && !value.is_empty() => {
                offset = Some(value.into_owned());
            }
            PARAM_SORT if sort.is_none() && !value.is_empty() => {
                sort = Some(value.into_owned());
            }
            _ => {}
        }
    }

    if let Some(raw) = limit {
        match raw.parse::<usize>() {
            Ok(value) => params.limit = value,
            Err(err) => return Err(ParamError::new(PARAM_PAGE_LIMIT, &raw, err, params)),
        }
    }

    if let Some(raw) = offset {
        match raw.parse::<usize>() {
            Ok(value) => params.offset = value,
            Err(err) => return Err(ParamError::new(PARAM_PAGE_OFFSET, &raw, err, params)),
        }
    }

    if let Some(raw) = sort {
        for token in raw.split(',') {
            let parts: Vec<&str> = token.split('.').collect();
            if let [field, order] = parts[..] {
                params.sort.push(Sort {
                    field: field.to_string(),
                    order: order.to_string(),
                });
            } else {
                tracing::debug!(token, "discarding malformed sort token");
            }
        }
    }

    Ok(params)
}

/// Pulls the query string out of an absolute URL or root-relative path;
/// anything else is assumed to already be a query string.
fn query_string_of(request_url: &str) -> String {
    if request_url.starts_with("http") || request_url.starts_with('/') {
        let parsed = Url::parse(request_url)
            .or_else(|_| Url::parse(&format!("http://localhost{}", request_url)));
        if let Ok(url) = parsed {
            return url.query().unwrap_or("").to_string();
        }
    }
    request_url.to_string()
}
