//! Offset pagination over the post listing.

use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::entities::PostRecord;
use crate::domain::error::DomainError;
use crate::domain::paging::{DEFAULT_PAGE_LIMIT, PageWindow};

/// Reference to a neighbouring page, echoed back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    pub page_number: i64,
    pub limit: i64,
}

impl From<PageWindow> for PageLink {
    fn from(window: PageWindow) -> Self {
        Self {
            page_number: window.page_number(),
            limit: window.limit(),
        }
    }
}

/// One page of posts plus the metadata needed to walk the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub total_posts: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    pub data: Vec<PostRecord>,
    pub rows_per_page: i64,
}

/// Page parameters as supplied by a caller, before defaults are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page_number: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Build parameters from raw query values, ignoring anything unparseable.
    pub fn from_raw(page_number: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page_number: page_number.and_then(parse_leading_int),
            limit: limit.and_then(parse_leading_int),
        }
    }
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and one sign character are accepted and anything after
/// the first run of digits is ignored, so `"5abc"` and `"5.9"` both read as 5.
/// A `0x`/`0X` prefix switches to hexadecimal, so `"0x10"` reads as 16.
/// Returns `None` when no digit follows or the value does not fit in `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = digits
        .bytes()
        .take_while(|byte| char::from(*byte).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Error)]
pub enum ListPostsError {
    #[error(transparent)]
    InvalidParams(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub struct PostListService {
    posts: Arc<dyn PostsRepo>,
    default_limit: i64,
}

impl PostListService {
    pub fn new(posts: Arc<dyn PostsRepo>) -> Self {
        Self {
            posts,
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    /// Resolve defaults for missing parameters. A zero limit counts as missing.
    pub fn resolve_window(&self, params: PageParams) -> Result<PageWindow, DomainError> {
        let page_number = params.page_number.unwrap_or(0);
        let limit = match params.limit {
            Some(0) | None => self.default_limit,
            Some(limit) => limit,
        };
        PageWindow::new(page_number, limit)
    }

    pub async fn list_posts(&self, params: PageParams) -> Result<PostPage, ListPostsError> {
        counter!("postboard_posts_requests_total").increment(1);

        let window = self.resolve_window(params)?;

        let total_posts = self.posts.count_posts().await?;
        let previous = window.previous().map(PageLink::from);

        // The listing is not snapshot-consistent: `next` is decided from a fresh count.
        let latest_total = self.posts.count_posts().await?;
        let next = window.next(latest_total).map(PageLink::from);

        let data = self.posts.list_posts(window).await?;

        debug!(
            target = "postboard::pagination",
            page_number = window.page_number(),
            limit = window.limit(),
            total_posts,
            returned = data.len(),
            "listed posts"
        );

        Ok(PostPage {
            total_posts,
            previous,
            next,
            data,
            rows_per_page: window.limit(),
        })
    }
}
