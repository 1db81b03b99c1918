use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::SentivestError;

pub const DEFAULT_LIMIT: u32 = 20;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// Validated `?limit=` query parameter. Rejects with 422 before any database work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(pub u32);

/// Read `limit` from a raw query string. When repeated, the last occurrence wins.
/// Absent means [`DEFAULT_LIMIT`]; anything that is not an integer in
/// `MIN_LIMIT..=MAX_LIMIT` is a validation error.
pub fn parse_limit(query: Option<&str>) -> Result<u32, SentivestError> {
    let raw = query
        .into_iter()
        .flat_map(|qs| url::form_urlencoded::parse(qs.as_bytes()))
        .filter(|(k, _)| k == "limit")
        .last()
        .map(|(_, v)| v.into_owned());

    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };

    let limit: i64 = raw.trim().parse().map_err(|_| {
        SentivestError::Validation(format!("limit must be an integer, got {raw:?}"))
    })?;

    if !(i64::from(MIN_LIMIT)..=i64::from(MAX_LIMIT)).contains(&limit) {
        return Err(SentivestError::Validation(format!(
            "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
        )));
    }
    Ok(limit as u32)
}

impl<S> FromRequestParts<S> for ListLimit
where
    S: Send + Sync,
{
    type Rejection = SentivestError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_limit(parts.uri.query()).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(query: &str) -> bool {
        matches!(parse_limit(Some(query)), Err(SentivestError::Validation(_)))
    }

    #[test]
    fn absent_limit_defaults_to_twenty() {
        assert_eq!(parse_limit(None).unwrap(), 20);
        assert_eq!(parse_limit(Some("")).unwrap(), 20);
        assert_eq!(parse_limit(Some("other=5")).unwrap(), 20);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_limit(Some("limit=1")).unwrap(), 1);
        assert_eq!(parse_limit(Some("limit=100")).unwrap(), 100);
        assert_eq!(parse_limit(Some("x=1&limit=42")).unwrap(), 42);
    }

    #[test]
    fn repeated_limit_uses_last_value() {
        assert!(rejected("limit=5&limit=500"));
        assert_eq!(parse_limit(Some("limit=500&limit=5")).unwrap(), 5);
        assert_eq!(parse_limit(Some("limit=1&other=x&limit=30")).unwrap(), 30);
    }

    #[test]
    fn out_of_range_is_rejected() {
        for q in ["limit=0", "limit=101", "limit=-5", "limit=99999999999999999999"] {
            assert!(rejected(q), "{q}");
        }
    }

    #[test]
    fn non_integer_is_rejected() {
        for q in ["limit=abc", "limit=", "limit=2.5", "limit=1e2"] {
            assert!(rejected(q), "{q}");
        }
    }
}
