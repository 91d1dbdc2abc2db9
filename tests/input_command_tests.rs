use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cryptotrader::input::{parse_key_event, parse_main_command, UiCommand};

#[test]
fn parse_main_command_maps_toggle_keys() {
    assert_eq!(
        parse_main_command(&KeyCode::Char('b')),
        Some(UiCommand::ToggleBot)
    );
    assert_eq!(
        parse_main_command(&KeyCode::Char('B')),
        Some(UiCommand::ToggleBot)
    );
    assert_eq!(
        parse_main_command(&KeyCode::Char(' ')),
        Some(UiCommand::ToggleBot)
    );
    assert_eq!(parse_main_command(&KeyCode::Enter), Some(UiCommand::ToggleBot));
}

#[test]
fn parse_main_command_maps_quit_keys() {
    assert_eq!(parse_main_command(&KeyCode::Char('q')), Some(UiCommand::Quit));
    assert_eq!(parse_main_command(&KeyCode::Char('Q')), Some(UiCommand::Quit));
    assert_eq!(parse_main_command(&KeyCode::Esc), Some(UiCommand::Quit));
}

#[test]
fn parse_main_command_ignores_unbound_keys() {
    assert_eq!(parse_main_command(&KeyCode::Char('x')), None);
    assert_eq!(parse_main_command(&KeyCode::Up), None);
    assert_eq!(parse_main_command(&KeyCode::Tab), None);
}

#[test]
/// Verifies raw-mode Ctrl+C quits:
/// the terminal delivers it as a key event, so it must map to Quit rather than be ignored.
fn parse_key_event_maps_ctrl_c_to_quit() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(parse_key_event(&ctrl_c), Some(UiCommand::Quit));

    let ctrl_shift_c = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert_eq!(parse_key_event(&ctrl_shift_c), Some(UiCommand::Quit));

    let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
    assert_eq!(parse_key_event(&plain_c), None);
}

#[test]
/// Verifies unmodified keys fall through to the main command map,
/// while other Ctrl chords stay unbound.
fn parse_key_event_delegates_plain_keys() {
    assert_eq!(
        parse_key_event(&KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE)),
        Some(UiCommand::ToggleBot)
    );
    assert_eq!(
        parse_key_event(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
        Some(UiCommand::Quit)
    );
    assert_eq!(
        parse_key_event(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        Some(UiCommand::Quit)
    );
    assert_eq!(
        parse_key_event(&KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)),
        None
    );
}
