use crate::posts::PostRecord;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::posts::{LoadStatus, PostListState};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BODY_TEXT, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    draw_posts(frame, app.posts(), app.endpoint());
}

/// Render a post list state. Split from [`draw`] so it can be exercised
/// without a live fetcher.
pub fn draw_posts(frame: &mut Frame<'_>, state: &PostListState, endpoint: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(state, endpoint), header);
    frame.render_widget(Clear, body);
    if state.posts.is_empty() {
        frame.render_widget(placeholder(state), body);
    } else {
        draw_list(frame, state, body);
    }
    frame.render_widget(Footer::new().widget(state, footer), footer);
}

fn draw_list(frame: &mut Frame<'_>, state: &PostListState, body: Rect) {
    let items: Vec<ListItem> = state.posts.iter().map(post_item).collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▌ ");
    let mut list_state = ListState::default().with_selected(state.selected);
    frame.render_stateful_widget(list, body, &mut list_state);
}

/// Rows one post takes in the list: title, every body line, blank gap.
pub fn post_height(post: &PostRecord) -> usize {
    post.body.lines().count() + 2
}

fn post_item(post: &PostRecord) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        post.title.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        post.body
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(BODY_TEXT)))),
    );
    lines.push(Line::from(""));
    ListItem::new(Text::from(lines))
}

fn placeholder(state: &PostListState) -> Paragraph<'static> {
    let lines = match &state.status {
        LoadStatus::Idle => vec![],
        LoadStatus::Loading => vec![Line::from("  Loading posts…")],
        LoadStatus::Loaded => vec![Line::from("  No posts.")],
        LoadStatus::Failed { message } => vec![
            Line::from(Span::styled(
                format!("  Failed to load posts: {message}"),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Press r to try again.",
                Style::default().fg(BODY_TEXT),
            )),
        ],
    };
    Paragraph::new(lines).wrap(Wrap { trim: false })
}
