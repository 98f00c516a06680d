//! Process-level startup behaviour

use std::process::Command;

#[test]
fn test_missing_token_exits_before_polling() {
    let dir = std::env::temp_dir().join(format!("lingo-bot-startup-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lingo-bot"))
        .current_dir(&dir)
        .env_remove("TELEGRAM_TOKEN")
        .env_remove("LINGO_BOT__BOT__TOKEN")
        .env_remove("LINGO_BOT_ENV")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("TELEGRAM_TOKEN"), "stderr was: {}", stderr);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_blank_token_is_missing() {
    let dir = std::env::temp_dir().join(format!("lingo-bot-blank-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lingo-bot"))
        .current_dir(&dir)
        .env("TELEGRAM_TOKEN", "   ")
        .env_remove("LINGO_BOT__BOT__TOKEN")
        .env_remove("LINGO_BOT_ENV")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing bot token"));

    let _ = std::fs::remove_dir_all(&dir);
}
