use crate::ui::app::App;
use crate::ui::posts::PostListIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    let page = app.page_size();
    let intent = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return;
        }
        KeyCode::Char('r') => {
            app.request_fetch();
            return;
        }
        KeyCode::Down | KeyCode::Char('j') => PostListIntent::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => PostListIntent::SelectPrevious,
        KeyCode::PageDown => PostListIntent::PageDown { page },
        KeyCode::PageUp => PostListIntent::PageUp { page },
        KeyCode::Home | KeyCode::Char('g') => PostListIntent::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => PostListIntent::SelectLast,
        _ => return,
    };
    app.dispatch_posts(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
