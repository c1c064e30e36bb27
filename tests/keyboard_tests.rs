// Host-side tests for keyboard shortcut mapping.

use hextrail_web::input::{key_command, KeyCommand};

#[test]
fn key_command_valid_keys() {
    assert_eq!(key_command("f"), Some(KeyCommand::ToggleFullscreen));
    assert_eq!(key_command("F"), Some(KeyCommand::ToggleFullscreen));
    assert_eq!(key_command("r"), Some(KeyCommand::Reset));
    assert_eq!(key_command("R"), Some(KeyCommand::Reset));
    assert_eq!(key_command("s"), Some(KeyCommand::ToggleSpin));
    assert_eq!(key_command("S"), Some(KeyCommand::ToggleSpin));
    assert_eq!(key_command("w"), Some(KeyCommand::ToggleWander));
    assert_eq!(key_command("W"), Some(KeyCommand::ToggleWander));
    assert_eq!(key_command("Escape"), Some(KeyCommand::ExitFullscreen));
    assert_eq!(key_command(" "), Some(KeyCommand::TogglePause));
}

#[test]
fn key_command_invalid_keys() {
    for key in ["a", "x", "h", "1", "Enter", "ArrowUp", "Shift", "esc"] {
        assert_eq!(key_command(key), None, "{key:?} should not be bound");
    }
}

#[test]
fn key_command_edge_cases() {
    assert_eq!(key_command(""), None);
    assert_eq!(key_command("ff"), None);
    assert_eq!(key_command("escape"), None);
}
