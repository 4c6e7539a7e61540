use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,     // .: leave the instructions screen
    Refresh,   // :: re-sample and redraw
    Quit,      // q
    Interrupt, // Ctrl-C: raw mode swallows SIGINT, so treat it as one
    None,
}

pub fn handle_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Interrupt,
        (KeyCode::Char('.'), _) => Action::Start,
        (KeyCode::Char(':'), _) => Action::Refresh,
        (KeyCode::Char('q'), _) => Action::Quit,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(handle_key(key('.')), Action::Start);
        assert_eq!(handle_key(key(':')), Action::Refresh);
        assert_eq!(handle_key(key('q')), Action::Quit);
        assert_eq!(handle_key(key('Q')), Action::None);
        assert_eq!(handle_key(key('r')), Action::None);
        assert_eq!(handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)), Action::None);
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Interrupt,
        );
    }

    #[test]
    fn test_shifted_colon() {
        // most terminals report ':' with SHIFT held
        assert_eq!(handle_key(KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT)), Action::Refresh);
    }
}
