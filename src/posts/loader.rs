//! Runs a fetch on the async runtime and hands the result to the UI thread.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::posts::fetch::PostFetcher;
use crate::ui::events::AppEvent;

/// Owner of one in-flight fetch. Dropping it aborts the task.
pub struct FetchHandle {
    task: JoinHandle<()>,
}

impl FetchHandle {
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn one fetch. The outcome arrives as [`AppEvent::PostsLoaded`].
///
/// The task only holds a channel sender; if the UI side is gone the
/// result is dropped.
pub fn spawn_fetch(
    runtime: &Handle,
    fetcher: Arc<PostFetcher>,
    sink: Sender<AppEvent>,
) -> FetchHandle {
    let task = runtime.spawn(async move {
        let result = fetcher.fetch_posts().await;
        match &result {
            Ok(posts) => tracing::info!(count = posts.len(), "Fetched posts"),
            Err(err) => tracing::error!(kind = err.kind(), "Fetch failed: {err}"),
        }
        if sink.send(AppEvent::PostsLoaded(result)).is_err() {
            tracing::trace!("Fetch result dropped (receiver gone)");
        }
    });

    FetchHandle { task }
}
