use crate::ui::posts::PostListState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ↑/↓: Move │ PgUp/PgDn: Page │ Home/End: Jump │ r: Refresh │ q: Quit";

/// Key hints on the left; selection position and version on the right.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &PostListState, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let position = position_label(state);
        let version = format!("v{VERSION} ");

        let right_width =
            position.as_ref().map_or(0, |p| p.chars().count() + 3) + version.chars().count();
        let content_width = usize::from(area.width.saturating_sub(2));
        // Hints go first when the bar is too narrow for everything
        let hints_width = HINTS.chars().count();
        let padding = content_width.saturating_sub(hints_width + right_width);

        let mut spans = vec![
            Span::styled(HINTS, dim),
            Span::styled(" ".repeat(padding), dim),
        ];
        if let Some(position) = position {
            spans.push(Span::styled(position, Style::default().fg(ACCENT)));
            spans.push(Span::styled(" │ ", dim));
        }
        spans.push(Span::styled(version, dim));

        Paragraph::new(Line::from(spans)).style(dim).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// `selected/total`, 1-based. `None` when nothing is selected.
fn position_label(state: &PostListState) -> Option<String> {
    state
        .selected
        .map(|index| format!("{}/{}", index + 1, state.posts.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::PostRecord;

    fn posts(count: i64) -> Vec<PostRecord> {
        (1..=count)
            .map(|id| PostRecord {
                user_id: 1,
                id,
                title: format!("t{id}"),
                body: String::new(),
            })
            .collect()
    }

    #[test]
    fn position_is_one_based() {
        let state = PostListState {
            posts: posts(100),
            selected: Some(11),
            ..PostListState::default()
        };
        assert_eq!(position_label(&state).as_deref(), Some("12/100"));
    }

    #[test]
    fn no_position_without_selection() {
        assert_eq!(position_label(&PostListState::default()), None);
    }
}
