use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::constants::PAGE_SCROLL_LINES;
use crate::types::{Mode, ScrollDirection};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    None,
    Quit,
    Submit(String),
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return KeyAction::Quit;
        }

        if let Some((direction, amount)) = Self::scroll_for(key.code) {
            app.handle_scroll(direction, amount);
            return KeyAction::None;
        }

        if !app.can_edit_input() {
            return KeyAction::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                app.mode = Mode::Estimating;
                KeyAction::Submit(app.take_input())
            }
            (KeyCode::Esc, _) => {
                app.input.clear();
                KeyAction::None
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                app.input.push(c);
                KeyAction::None
            }
            (KeyCode::Backspace, _) => {
                app.input.pop();
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    fn scroll_for(code: KeyCode) -> Option<(ScrollDirection, usize)> {
        match code {
            KeyCode::Up => Some((ScrollDirection::Up, 1)),
            KeyCode::Down => Some((ScrollDirection::Down, 1)),
            KeyCode::PageUp => Some((ScrollDirection::PageUp, PAGE_SCROLL_LINES)),
            KeyCode::PageDown => Some((ScrollDirection::PageDown, PAGE_SCROLL_LINES)),
            KeyCode::Home => Some((ScrollDirection::Home, 0)),
            KeyCode::End => Some((ScrollDirection::End, 0)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SharedChart;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_then_enter_submits() {
        let mut app = App::new(SharedChart::new());
        for c in "apple".chars() {
            assert_eq!(InputHandler::handle_key(&mut app, press(KeyCode::Char(c))), KeyAction::None);
        }
        InputHandler::handle_key(&mut app, press(KeyCode::Backspace));
        InputHandler::handle_key(&mut app, press(KeyCode::Char('e')));

        let action = InputHandler::handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(action, KeyAction::Submit("apple".to_string()));
        assert!(app.input.is_empty());
        assert_eq!(app.mode, Mode::Estimating);

        // input is locked while estimating
        InputHandler::handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(app.input.is_empty());
    }

    #[test]
    fn ctrl_c_quits_and_esc_clears() {
        let mut app = App::new(SharedChart::new());
        app.input = "pizza".into();
        InputHandler::handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.input.is_empty());

        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::handle_key(&mut app, quit), KeyAction::Quit);
    }
}
