use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    ToggleBot,
    Quit,
}

pub fn parse_main_command(key_code: &KeyCode) -> Option<UiCommand> {
    match key_code {
        KeyCode::Enter => Some(UiCommand::ToggleBot),
        KeyCode::Esc => Some(UiCommand::Quit),
        KeyCode::Char(' ') => Some(UiCommand::ToggleBot),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'b' => Some(UiCommand::ToggleBot),
            'q' => Some(UiCommand::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Full key event parsing. Raw mode delivers Ctrl+C as a key press, not SIGINT.
pub fn parse_key_event(key: &KeyEvent) -> Option<UiCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(UiCommand::Quit),
            _ => None,
        };
    }
    parse_main_command(&key.code)
}
