//! Keyboard Input Handler
//!
//! Maps key presses onto selection movement, scrolling and view events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;
use waterfall::model::ui::VimCommandState;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.ui.should_quit = true;
        return;
    }

    // Vim double-key commands
    if app.ui.vim_mode && app.ui.vim_command_state == VimCommandState::WaitingForSecondG {
        app.ui.vim_command_state = VimCommandState::None;
        if key.code == KeyCode::Char('g') {
            app.first_item();
            return;
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.ui.should_quit = true;
        }
        KeyCode::Down | KeyCode::Char('j') => app.next_item(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
        KeyCode::Home => app.first_item(),
        KeyCode::End => app.last_item(),
        KeyCode::PageDown => app.half_page(true),
        KeyCode::PageUp => app.half_page(false),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('r') => app.force_refresh(),

        KeyCode::Char('G') => app.last_item(),
        KeyCode::Char('g') if app.ui.vim_mode => {
            app.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        KeyCode::Char('g') => app.first_item(),
        KeyCode::Char('d') if app.ui.vim_mode && ctrl => app.half_page(true),
        KeyCode::Char('u') if app.ui.vim_mode && ctrl => app.half_page(false),
        _ => {}
    }
}
