use crate::ui::app::{App, GridMove};
use crate::view::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

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
        KeyCode::Tab | KeyCode::BackTab => app.next_tab(),
        KeyCode::Char('1') => app.select_tab(Tab::All),
        KeyCode::Char('2') => app.select_tab(Tab::Favorites),
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(GridMove::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(GridMove::Right),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(GridMove::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(GridMove::Down),
        KeyCode::Char('f') | KeyCode::Char(' ') => app.toggle_selected_favorite(),
        KeyCode::Char('a') | KeyCode::Enter => app.add_selected_to_cart(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
