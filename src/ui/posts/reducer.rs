use crate::config::FailurePolicy;
use crate::ui::mvi::Reducer;
use crate::ui::posts::intent::PostListIntent;
use crate::ui::posts::state::{LoadStatus, PostListState};

pub struct PostListReducer;

impl Reducer for PostListReducer {
    type State = PostListState;
    type Intent = PostListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostListIntent::FetchStarted => PostListState {
                status: LoadStatus::Loading,
                ..state
            },
            PostListIntent::Loaded { posts } => {
                let selected = if posts.is_empty() { None } else { Some(0) };
                PostListState {
                    posts,
                    status: LoadStatus::Loaded,
                    selected,
                }
            }
            PostListIntent::Failed { message, policy } => match policy {
                FailurePolicy::Keep => PostListState {
                    status: LoadStatus::Failed { message },
                    ..state
                },
                FailurePolicy::Clear => PostListState {
                    posts: Vec::new(),
                    status: LoadStatus::Failed { message },
                    selected: None,
                },
            },
            PostListIntent::SelectNext => move_selection(state, |idx, _| idx.saturating_add(1)),
            PostListIntent::SelectPrevious => {
                move_selection(state, |idx, _| idx.saturating_sub(1))
            }
            PostListIntent::PageDown { page } => {
                move_selection(state, |idx, _| idx.saturating_add(page.max(1)))
            }
            PostListIntent::PageUp { page } => {
                move_selection(state, |idx, _| idx.saturating_sub(page.max(1)))
            }
            PostListIntent::SelectFirst => move_selection(state, |_, _| 0),
            PostListIntent::SelectLast => move_selection(state, |_, last| last),
        }
    }
}

/// Apply `step(current, last_index)` and clamp. No-op on an empty list.
fn move_selection(
    state: PostListState,
    step: impl FnOnce(usize, usize) -> usize,
) -> PostListState {
    let Some(last) = state.posts.len().checked_sub(1) else {
        return state;
    };
    let current = state.selected.unwrap_or(0);
    PostListState {
        selected: Some(step(current, last).min(last)),
        ..state
    }
}
