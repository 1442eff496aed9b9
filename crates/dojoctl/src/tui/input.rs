//! Key handling for the lobby and the drill screen

use super::state::{DojoTuiState, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dojo_common::Mode;
use std::time::Instant;

/// Apply one key press to the state
pub fn handle_key(state: &mut DojoTuiState, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C - exit from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    match state.screen {
        Screen::Lobby => match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') => state.start_drill(Mode::Addition),
            KeyCode::Char('s') | KeyCode::Char('S') => state.start_drill(Mode::Subtraction),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => state.should_quit = true,
            _ => {}
        },
        Screen::Dojo => match key.code {
            KeyCode::Esc => {
                if state.show_help {
                    state.show_help = false;
                } else {
                    state.back_to_lobby();
                }
            }
            KeyCode::F(1) => state.show_help = !state.show_help,
            KeyCode::Enter => {
                state.submit(now);
            }
            KeyCode::Backspace => state.backspace(now),
            KeyCode::Char(c) => {
                state.push_char(c, now);
            }
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_common::config::TimingConfig;
    use dojo_common::ProblemEngine;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> DojoTuiState {
        DojoTuiState::with_timing(ProblemEngine::with_seed(1), &TimingConfig::default(), false)
    }

    #[test]
    fn test_lobby_keys_select_mode() {
        let now = Instant::now();
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('s')), now);
        assert_eq!(s.screen, Screen::Dojo);
        assert_eq!(s.engine.mode(), Mode::Subtraction);

        handle_key(&mut s, press(KeyCode::Esc), now);
        assert_eq!(s.screen, Screen::Lobby);

        handle_key(&mut s, press(KeyCode::Char('A')), now);
        assert_eq!(s.engine.mode(), Mode::Addition);
    }

    #[test]
    fn test_escape_in_lobby_quits() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Esc), Instant::now());
        assert!(s.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dojo() {
        let now = Instant::now();
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('a')), now);
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
        assert!(s.should_quit);
    }

    #[test]
    fn test_typing_and_enter_submits() {
        let now = Instant::now();
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('a')), now);
        let answer = s.engine.expected_answer().to_string();
        for c in answer.chars() {
            handle_key(&mut s, press(KeyCode::Char(c)), now);
        }
        handle_key(&mut s, press(KeyCode::Char('9')), now);
        handle_key(&mut s, press(KeyCode::Backspace), now);
        handle_key(&mut s, press(KeyCode::Enter), now);
        assert_eq!(s.engine.streak(), 1);
    }

    #[test]
    fn test_help_toggle_and_escape() {
        let now = Instant::now();
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('a')), now);
        handle_key(&mut s, press(KeyCode::F(1)), now);
        assert!(s.show_help);
        handle_key(&mut s, press(KeyCode::Esc), now);
        assert!(!s.show_help);
        assert_eq!(s.screen, Screen::Dojo);
    }
}
