//! Non-interactive sink: fetch once and print the posts to a writer.

use std::io::{self, Write};

use crate::posts::{FetchError, PostFetcher, PostRecord};

/// Fetch once and print to stdout. Failures are logged and returned.
pub async fn run(fetcher: &PostFetcher) -> Result<usize, FetchError> {
    let posts = match fetcher.fetch_posts().await {
        Ok(posts) => posts,
        Err(err) => {
            tracing::error!(kind = err.kind(), "Fetch failed: {err}");
            return Err(err);
        }
    };
    tracing::info!(count = posts.len(), "Fetched posts");

    let stdout = io::stdout();
    if let Err(err) = write_posts(&mut stdout.lock(), &posts) {
        // Closed pipe (e.g. `| head`) is not a fetch failure
        tracing::debug!("Stopped writing posts: {err}");
    }
    Ok(posts.len())
}

/// One block per post: a `#id [user N] title` line, the body indented by
/// four spaces, then a blank line.
pub fn write_posts<W: Write>(out: &mut W, posts: &[PostRecord]) -> io::Result<()> {
    for post in posts {
        writeln!(out, "#{} [user {}] {}", post.id, post.user_id, post.title)?;
        for line in post.body.lines() {
            writeln!(out, "    {line}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_blocks_in_order() {
        let posts = vec![
            PostRecord {
                user_id: 1,
                id: 2,
                title: "hello".to_string(),
                body: "line one\nline two".to_string(),
            },
            PostRecord {
                user_id: 3,
                id: 1,
                title: "bye".to_string(),
                body: "end".to_string(),
            },
        ];
        let mut out = Vec::new();
        write_posts(&mut out, &posts).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#2 [user 1] hello\n    line one\n    line two\n\n#1 [user 3] bye\n    end\n\n"
        );
    }

    #[test]
    fn empty_list_writes_nothing() {
        let mut out = Vec::new();
        write_posts(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
