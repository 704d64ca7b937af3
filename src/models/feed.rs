//! Feed data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{feed_follow::FeedFollow, normalize_name};
use crate::error::AppError;

const MAX_URL_LEN: usize = 2048;

/// A feed record from the `feeds` table.
///
/// `url` is unique across all feeds. `user_id` is the user who registered it.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Feed {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub url: String,
    pub user_id: Uuid,
}

/// Request body for `POST /v1/feeds`.
///
/// ```json
/// { "name": "Hacker News", "url": "https://news.ycombinator.com/rss" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateFeedRequest {
    pub name: String,
    pub url: String,
}

impl CreateFeedRequest {
    /// Validate the request and build the row to insert for `user_id`.
    pub fn into_new_feed(self, user_id: Uuid) -> Result<NewFeed, AppError> {
        let name = normalize_name("name", &self.name)?;
        let url = validate_feed_url(self.url.trim())?;

        Ok(NewFeed::new(name, url, user_id))
    }
}

/// Insert parameters for a feed.
#[derive(Debug, Clone)]
pub struct NewFeed {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub url: String,
    pub user_id: Uuid,
}

impl NewFeed {
    pub fn new(name: String, url: String, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name,
            url,
            user_id,
        }
    }
}

/// Response for `POST /v1/feeds`: the feed and the creator's follow of it.
#[derive(Debug, Serialize)]
pub struct CreateFeedResponse {
    pub feed: Feed,
    pub feed_follow: FeedFollow,
}

/// Response for `GET /v1/feeds`.
#[derive(Debug, Serialize)]
pub struct FeedsResponse {
    pub feeds: Vec<Feed>,
}

/// Check a feed URL is an absolute http(s) URL and return its normalized form.
fn validate_feed_url(url: &str) -> Result<String, AppError> {
    if url.is_empty() {
        return Err(AppError::InvalidRequest("url is required".to_string()));
    }
    if url.len() > MAX_URL_LEN {
        return Err(AppError::InvalidRequest(format!(
            "url exceeds {MAX_URL_LEN} characters"
        )));
    }

    let parsed = url::Url::parse(url)
        .map_err(|_| AppError::InvalidRequest("invalid url format".to_string()))?;

    // http(s) URLs always parse with a host, so the scheme is the only check.
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::InvalidRequest(
            "url must use http or https".to_string(),
        ));
    }

    // Store the parsed form so case variants of scheme and host collide on
    // the unique index.
    let normalized = parsed.to_string();
    if normalized.len() > MAX_URL_LEN {
        return Err(AppError::InvalidRequest(format!(
            "url exceeds {MAX_URL_LEN} characters"
        )));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, url: &str) -> CreateFeedRequest {
        CreateFeedRequest {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn valid_feed_is_owned_by_caller() {
        let owner = Uuid::new_v4();
        let feed = request("Hacker News", " https://news.ycombinator.com/rss ")
            .into_new_feed(owner)
            .unwrap();

        assert_eq!(feed.user_id, owner);
        assert_eq!(feed.name, "Hacker News");
        assert_eq!(feed.url, "https://news.ycombinator.com/rss");
        assert_ne!(feed.id, owner);
    }

    #[test]
    fn rejects_non_http_schemes() {
        let err = request("Local", "file:///etc/passwd")
            .into_new_feed(Uuid::new_v4())
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(ref m) if m == "url must use http or https"));
    }

    #[test]
    fn rejects_relative_and_garbage_urls() {
        for url in ["/rss.xml", "not a url", ""] {
            let result = request("Feed", url).into_new_feed(Uuid::new_v4());
            assert!(
                matches!(result, Err(AppError::InvalidRequest(_))),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overlong_url() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LEN));
        let result = request("Feed", &url).into_new_feed(Uuid::new_v4());
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn url_scheme_and_host_are_normalized() {
        let feed = request("HN", "HTTPS://NEWS.YCombinator.COM/rss")
            .into_new_feed(Uuid::new_v4())
            .unwrap();

        assert_eq!(feed.url, "https://news.ycombinator.com/rss");
    }

    #[test]
    fn path_case_is_preserved() {
        let feed = request("HN", "https://example.com/Feeds/RSS.xml")
            .into_new_feed(Uuid::new_v4())
            .unwrap();

        assert_eq!(feed.url, "https://example.com/Feeds/RSS.xml");
    }

    #[test]
    fn rejects_blank_name() {
        let result = request("", "https://example.com/rss").into_new_feed(Uuid::new_v4());
        assert!(matches!(result, Err(AppError::InvalidRequest(ref m)) if m == "name is required"));
    }
}
