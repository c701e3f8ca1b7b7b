use serde::Serialize;

pub const POSTS_FETCHED_MESSAGE: &str = "Post Fetched successfully";
pub const GENERIC_FAILURE_MESSAGE: &str = "Sorry, something went wrong";
pub const INVALID_PAGINATION_MESSAGE: &str = "Invalid pagination parameters";

/// Raw listing query. Values stay strings so unparseable input can fall back
/// to defaults instead of rejecting the request. A repeated key keeps its
/// first value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PostListQuery {
    pub page_number: Option<String>,
    pub limit: Option<String>,
}

impl PostListQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "pageNumber" => &mut query.page_number,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Success envelope: `{ "msg": ..., "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T> {
    pub msg: &'static str,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn new(msg: &'static str, data: T) -> Self {
        Self { msg, data }
    }
}

/// Failure body: `{ "msg": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub msg: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let query = PostListQuery::from_pairs(pairs(&[
            ("limit", "3"),
            ("pageNumber", "1"),
            ("limit", "5"),
            ("pageNumber", "0"),
        ]));
        assert_eq!(query.limit.as_deref(), Some("3"));
        assert_eq!(query.page_number.as_deref(), Some("1"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = PostListQuery::from_pairs(pairs(&[("page", "2"), ("Limit", "4")]));
        assert_eq!(query, PostListQuery::default());
    }
}
