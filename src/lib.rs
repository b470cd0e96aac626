//! # limit-offset
//!
//! Limit/offset pagination for list endpoints, without a count query.
//!
//! The crate does three things:
//!
//! - extracts `page[limit]`, `page[offset]` and `sort` parameters from a
//!   request URL or raw query string ([`extract_params`]);
//! - renders the trailing SQL fragment for the data query
//!   ([`PageParams::sql_fragment`]), requesting one row more than the page
//!   size so the existence of a further page can be detected without a
//!   separate `COUNT(*)`;
//! - trims that sentinel row and builds `first`/`prev`/`next` navigation
//!   links ([`paginate`]).
//!
//! The HTTP layer, query execution and JSON encoding stay with the caller;
//! all types derive `serde` traits so the response can be serialized as-is.
//!
//! ## Example
//!
//! ```rust
//! use limit_offset::{extract_params, paginate};
//!
//! let params = extract_params("/users?page[limit]=2&sort=name.asc", 0, 10)?;
//! assert_eq!(params.sql_fragment(), " LIMIT 3 OFFSET 0 ORDER BY name asc");
//!
//! // The data layer returned limit + 1 rows: a next page exists.
//! let rows = vec!["ada", "brian", "grace"];
//! let page = paginate(rows, "/users", &params);
//! assert_eq!(page.data, vec!["ada", "brian"]);
//! assert_eq!(
//!     page.links.next.as_deref(),
//!     Some("/users?page[limit]=2&page[offset]=2&sort=name.asc"),
//! );
//! # Ok::<(), limit_offset::ParamError>(())
//! ```

mod error;
mod params;
mod response;

pub use error::ParamError;
pub use params::{extract_params, PageParams, Sort};
pub use response::{paginate, PageLinks, PageResponse};

/// Query parameter holding the requested page size.
pub const PARAM_PAGE_LIMIT: &str = "page[limit]";
/// Query parameter holding the requested start offset.
pub const PARAM_PAGE_OFFSET: &str = "page[offset]";
/// Query parameter holding the sort specification.
pub const PARAM_SORT: &str = "sort";
