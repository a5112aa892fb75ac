//! Command Tests

use source_rcon::Command;

#[test]
fn test_command_without_args() {
    assert_eq!(Command::new("status").to_string(), "status");
}

#[test]
fn test_command_with_arg() {
    let cmd = Command::new("echo").arg("test me");
    assert_eq!(cmd.to_string(), "echo test me");
}

#[test]
fn test_command_mixed_args_keep_order() {
    let cmd = Command::new("kick").arg(42).arg("griefer").arg(1.5);
    assert_eq!(cmd.to_string(), "kick 42 griefer 1.5");
    assert_eq!(cmd.verb(), "kick");
}

#[test]
fn test_command_args_iter() {
    let cmd = Command::new("sv_cheats").args(["1", "2", "3"]);
    assert_eq!(cmd.to_string(), "sv_cheats 1 2 3");
}

#[test]
fn test_command_no_trailing_whitespace() {
    let rendered = Command::new("say").arg("hi").to_string();
    assert!(!rendered.ends_with(' '));
    assert!(!rendered.ends_with('\n'));
}

#[test]
fn test_command_from_str() {
    let cmd: Command = "changelevel de_dust2".into();
    assert_eq!(cmd.to_string(), "changelevel de_dust2");
}
