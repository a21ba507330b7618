use crate::config::FailurePolicy;
use crate::posts::PostRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostListIntent {
    /// A fetch was dispatched.
    FetchStarted,
    /// A fetch succeeded. Replaces the list wholesale.
    Loaded { posts: Vec<PostRecord> },
    /// A fetch failed. `policy` decides whether the old list survives.
    Failed {
        message: String,
        policy: FailurePolicy,
    },
    SelectNext,
    SelectPrevious,
    PageDown { page: usize },
    PageUp { page: usize },
    SelectFirst,
    SelectLast,
}

impl Intent for PostListIntent {}
