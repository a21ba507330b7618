use crate::ui::posts::{LoadStatus, PostListState};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &PostListState, endpoint: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_color) = status_label(state);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Posts",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint_host(endpoint), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(state: &PostListState) -> (String, ratatui::style::Color) {
    match &state.status {
        LoadStatus::Idle => ("Idle".to_string(), HEADER_SEPARATOR),
        LoadStatus::Loading => ("Loading…".to_string(), STATUS_PENDING),
        LoadStatus::Loaded => (format!("{} posts", state.posts.len()), STATUS_OK),
        LoadStatus::Failed { .. } if state.posts.is_empty() => {
            ("Error".to_string(), STATUS_ERROR)
        }
        LoadStatus::Failed { .. } => (
            format!("Error (showing {} stale posts)", state.posts.len()),
            STATUS_ERROR,
        ),
    }
}

/// Host part of the endpoint, or the raw string if it does not parse.
fn endpoint_host(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| endpoint.to_string())
}
