//! Binary-level checks for flags and startup failures.

use std::process::Command;

fn jokecard() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jokecard"));
    cmd.env_remove("JOKECARD_API_KEY")
        .env_remove("DEEPSEEK_API_KEY");
    cmd
}

#[test]
fn test_version_flag() {
    let output = jokecard().arg("--version").output().expect("run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("jokecard {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let output = jokecard().arg("-h").output().expect("run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USAGE"));
    assert!(stdout.contains("JOKECARD_API_KEY"));
}

#[test]
fn test_missing_api_key_exits_before_tui() {
    let output = jokecard().output().expect("run binary");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing API key"), "{}", stderr);
}
