use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::SourceConfig;
use crate::posts::error::FetchError;
use crate::posts::model::PostRecord;

/// Performs the GET / validate / decode cycle against one fixed endpoint.
pub struct PostFetcher {
    client: Client,
    url: String,
}

impl PostFetcher {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = source.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(u64::from(secs)));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client { source: e })?;

        Ok(Self {
            client,
            url: source.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the posts once.
    ///
    /// The body of a non-2xx response is never read.
    pub async fn fetch_posts(&self) -> Result<Vec<PostRecord>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching posts");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport { source: e })?;

        check_status(response.status())?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport { source: e })?;

        let posts = decode_posts(&body)?;
        warn_on_duplicate_ids(&posts);
        Ok(posts)
    }
}

/// Accept only 200..=299.
pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::BadServerResponse {
            status: status.as_u16(),
        })
    }
}

/// Decode a response body into posts, keeping body order.
pub fn decode_posts(body: &[u8]) -> Result<Vec<PostRecord>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode { source: e })
}

fn warn_on_duplicate_ids(posts: &[PostRecord]) {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if !seen.insert(post.id) {
            tracing::warn!(id = post.id, "Duplicate post id in response");
        }
    }
}
