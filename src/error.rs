use std::num::ParseIntError;

use thiserror::Error;

use crate::PageParams;

/// Error returned when a pagination parameter is present but does not parse
/// as a non-negative integer.
///
/// The error carries the best-effort [`PageParams`] assembled before the
/// failure (caller defaults, plus anything already parsed), so a caller can
/// choose to log the problem and proceed instead of rejecting the request:
///
/// ```rust
/// use limit_offset::extract_params;
///
/// let err = extract_params("/users?page[limit]=ten", 0, 25).unwrap_err();
/// assert_eq!(err.param(), "page[limit]");
/// assert_eq!(err.into_params().limit, 25);
/// ```
#[derive(Debug, Clone, Error)]
#[error("invalid value `{value}` for `{param}`")]
pub struct ParamError {
    param: &'static str,
    value: String,
    source: ParseIntError,
    params: PageParams,
}

impl ParamError {
    pub(crate) fn new(
        param: &'static str,
        value: &str,
        source: ParseIntError,
        params: PageParams,
    ) -> Self {
        Self {
            param,
            value: value.to_string(),
            source,
            params,
        }
    }

    /// Name of the query parameter that failed to parse.
    pub fn param(&self) -> &'static str {
        self.param
    }

    /// The offending raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Borrows the defaults-populated parameter set.
    pub fn params(&self) -> &PageParams {
        &self.params
    }

    /// Consumes the error, yielding the defaults-populated parameter set.
    pub fn into_params(self) -> PageParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use crate::extract_params;

    #[test]
    fn test_display_names_parameter_and_value() {
        let err = extract_params("/users?page[offset]=-3", 0, 10).unwrap_err();
        assert_eq!(err.to_string(), "invalid value `-3` for `page[offset]`");
        assert_eq!(err.param(), "page[offset]");
        assert_eq!(err.value(), "-3");
    }

    #[test]
    fn test_source_is_integer_parse_failure() {
        let err = extract_params("/users?page[limit]=abc", 0, 10).unwrap_err();
        assert!(err.source().is_some());
    }
}
