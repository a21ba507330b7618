use crate::config::FailurePolicy;
use crate::posts::{spawn_fetch, FetchError, FetchHandle, PostFetcher, PostRecord};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::posts::{PostListIntent, PostListReducer, PostListState};
use crate::ui::render::post_height;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// The observable post list (MVI pattern).
    posts: PostListState,
    failure_policy: FailurePolicy,
    fetcher: Arc<PostFetcher>,
    runtime: Handle,
    events: Sender<AppEvent>,
    /// In-flight fetch (resource, managed outside MVI). Dropping aborts it.
    fetch: Option<FetchHandle>,
}

impl App {
    pub fn new(
        fetcher: Arc<PostFetcher>,
        runtime: Handle,
        events: Sender<AppEvent>,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            should_quit: false,
            size: None,
            posts: PostListState::default(),
            failure_policy,
            fetcher,
            runtime,
            events,
            fetch: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn posts(&self) -> &PostListState {
        &self.posts
    }

    pub fn endpoint(&self) -> &str {
        self.fetcher.url()
    }

    /// Start a fresh fetch. Ignored while one is already in flight.
    ///
    /// Returns `true` if a fetch was dispatched.
    pub fn request_fetch(&mut self) -> bool {
        if self.posts.is_loading() || self.is_fetching() {
            tracing::debug!("Fetch already in flight, ignoring refresh");
            return false;
        }
        self.dispatch_posts(PostListIntent::FetchStarted);
        self.fetch = Some(spawn_fetch(
            &self.runtime,
            Arc::clone(&self.fetcher),
            self.events.clone(),
        ));
        true
    }

    /// True while a dispatched fetch has not reported back.
    pub fn is_fetching(&self) -> bool {
        self.fetch.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Called on the UI thread when a fetch completes.
    pub fn on_posts_loaded(&mut self, result: Result<Vec<PostRecord>, FetchError>) {
        self.fetch = None;
        match result {
            Ok(posts) => self.dispatch_posts(PostListIntent::Loaded { posts }),
            Err(err) => self.dispatch_posts(PostListIntent::Failed {
                message: err.to_string(),
                policy: self.failure_policy,
            }),
        }
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Number of posts one page-scroll moves by: how many whole posts,
    /// starting at the selection, fit in the list area. Never below 1.
    pub fn page_size(&self) -> usize {
        let Some((_, rows)) = self.size else {
            return 1;
        };
        let rows = usize::from(rows);
        let start = self.posts.selected.unwrap_or(0);
        let mut used = 0;
        let mut fitting = 0;
        for post in self.posts.posts.iter().skip(start) {
            used += post_height(post);
            if used > rows {
                break;
            }
            fitting += 1;
        }
        fitting.max(1)
    }

    pub fn dispatch_posts(&mut self, intent: PostListIntent) {
        dispatch_mvi!(self, posts, PostListReducer, intent);
    }

    /// Route one event from the channel. Returns after state is updated;
    /// the caller redraws.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(key) => crate::ui::input::handle_key(self, key),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(cols, rows) => {
                let body = crate::ui::layout::body_rect(ratatui::layout::Rect {
                    x: 0,
                    y: 0,
                    width: cols,
                    height: rows,
                });
                self.on_resize(body.width.max(1), body.height.max(1));
            }
            AppEvent::PostsLoaded(result) => self.on_posts_loaded(result),
        }
    }
}
