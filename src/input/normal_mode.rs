use crossterm::event::KeyCode;

use crate::app::AppState;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('h') | KeyCode::Left => state.move_cursor_days(-1),
        KeyCode::Char('l') | KeyCode::Right => state.move_cursor_days(1),
        KeyCode::Char('k') | KeyCode::Up => state.move_cursor_days(-7),
        KeyCode::Char('j') | KeyCode::Down => state.move_cursor_days(7),
        KeyCode::Char('{') => state.move_months(-1),
        KeyCode::Char('}') => state.move_months(1),
        KeyCode::Char('g') => state.jump_to_today(),
        KeyCode::Char('f') => state.toggle_fade_others(),
        KeyCode::Char('t') => state.cycle_theme(),
        KeyCode::Enter | KeyCode::Char(' ') => press(state, false),
        KeyCode::Char('x') => press(state, true),
        _ => {}
    }
}

fn press(state: &mut AppState, long: bool) {
    let dispatched = if long {
        state.long_press_cursor()
    } else {
        state.press_cursor()
    };
    if dispatched {
        state.process_actions();
    }
}
