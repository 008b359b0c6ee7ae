use crate::prefetch::PressModifiers;
use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_highlight(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_highlight(1),
        KeyCode::Enter => app.press_highlighted(press_modifiers(key.modifiers, false)),
        KeyCode::Home | KeyCode::Char('a') => app.go_index(),
        KeyCode::Char('r') => app.retry(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let Some(index) = app.entry_at(mouse.column, mouse.row) else {
        if matches!(mouse.kind, MouseEventKind::Moved) {
            app.pointer_left();
        }
        return;
    };

    match mouse.kind {
        MouseEventKind::Moved => app.hover_index(index),
        MouseEventKind::Down(MouseButton::Left) => {
            app.press_index(index, press_modifiers(mouse.modifiers, false))
        }
        // Middle or right button: "open elsewhere", never intercepted.
        MouseEventKind::Down(_) => app.press_index(index, press_modifiers(mouse.modifiers, true)),
        _ => {}
    }
}

/// Translate terminal modifier state into link-press modifiers.
pub fn press_modifiers(modifiers: KeyModifiers, secondary_button: bool) -> PressModifiers {
    PressModifiers {
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        shift: modifiers.contains(KeyModifiers::SHIFT),
        alt: modifiers.contains(KeyModifiers::ALT),
        meta: modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
        secondary_button,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
