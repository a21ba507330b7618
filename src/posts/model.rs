use serde::Deserialize;

/// One post as served by the remote source.
///
/// `id` is assigned by the server and is the record's identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostRecord {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}
