use crate::posts::PostRecord;
use crate::ui::mvi::UiState;

/// Where the current list came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed.
    Failed { message: String },
}

/// The observable post list the view renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostListState {
    pub posts: Vec<PostRecord>,
    pub status: LoadStatus,
    /// Index into `posts`; `None` iff the list is empty.
    pub selected: Option<usize>,
}

impl UiState for PostListState {}

impl PostListState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn selected_post(&self) -> Option<&PostRecord> {
        self.selected.and_then(|idx| self.posts.get(idx))
    }
}
