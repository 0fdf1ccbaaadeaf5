use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.prompt().is_some() {
        match key.code {
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.prompt_pop(),
            KeyCode::Char(ch) if !ch.is_control() => app.prompt_push(ch),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Left => app.go_back(),
        KeyCode::Char('n') | KeyCode::Right => app.step(1),
        KeyCode::Char('p') => app.step(-1),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('g') => app.open_prompt(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
