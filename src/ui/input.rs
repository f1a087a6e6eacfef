use crate::ui::app::App;
use crate::ui::nav::{NavIntent, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Joke => match key.code {
            KeyCode::Char('n') | KeyCode::Char('r') => app.refresh_joke(),
            KeyCode::Enter | KeyCode::Tab => app.navigate(NavIntent::Open(Screen::Counter)),
            _ => {}
        },
        Screen::Counter => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('+') => app.increment_counter(),
            KeyCode::Esc | KeyCode::Backspace => app.navigate(NavIntent::Back),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
