//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert the exact command sequence sent to a transport
pub fn assert_commands(actual: &[String], expected: &[&str]) {
    let actual: Vec<&str> = actual.iter().map(String::as_str).collect();
    assert_eq!(actual, expected);
}

/// Assert every command is a namespaced fill
pub fn assert_all_fills(commands: &[String]) {
    for command in commands {
        let parts: Vec<&str> = command.split_whitespace().collect();
        assert_eq!(parts.len(), 8, "Malformed fill: {command}");
        assert_eq!(parts[0], "fill", "Not a fill: {command}");
        for coord in &parts[1..7] {
            assert!(coord.parse::<i32>().is_ok(), "Bad coordinate in {command}");
        }
        assert!(parts[7].starts_with("minecraft:"), "Unqualified block in {command}");
    }
}
