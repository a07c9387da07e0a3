//! Input feature reducer.
//!
//! Handles editing keys for the query line. Submission, quit, and scroll
//! keys are routed by the main reducer before this is reached.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::InputState;

/// Handles an editing key. Unrecognized keys are ignored.
pub fn handle_key(input: &mut InputState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Ctrl+A / Ctrl+E: jump to line start / end
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        // Ctrl+U: unix line-kill
        KeyCode::Char('u') if ctrl => input.kill_to_start(),
        KeyCode::Char(ch) if !ctrl => input.insert_char(ch),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
