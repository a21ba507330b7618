//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use postboard::config::SourceConfig;
use postboard::posts::{PostFetcher, PostRecord};
use std::net::TcpListener;

/// Typical jsonplaceholder-shaped payload with three posts.
pub const THREE_POSTS: &str = r#"[
  {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit\nsuscipit recusandae"},
  {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore vitae"},
  {"userId": 2, "id": 11, "title": "et ea vero quia", "body": "delectus reiciendis molestiae"}
]"#;

pub fn three_posts() -> Vec<PostRecord> {
    vec![
        PostRecord {
            user_id: 1,
            id: 1,
            title: "sunt aut facere".to_string(),
            body: "quia et suscipit\nsuscipit recusandae".to_string(),
        },
        PostRecord {
            user_id: 1,
            id: 2,
            title: "qui est esse".to_string(),
            body: "est rerum tempore vitae".to_string(),
        },
        PostRecord {
            user_id: 2,
            id: 11,
            title: "et ea vero quia".to_string(),
            body: "delectus reiciendis molestiae".to_string(),
        },
    ]
}

pub fn fetcher_for(url: &str) -> PostFetcher {
    PostFetcher::new(&SourceConfig {
        url: url.to_string(),
        timeout_seconds: Some(5),
    })
    .expect("Failed to build fetcher")
}

/// URL of a local port with nothing listening.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/posts")
}
