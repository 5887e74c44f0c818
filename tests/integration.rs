//! Integration tests for the drone-commander binaries.
//!
//! Spawns the bot, feeds it a referee session on stdin, and checks the
//! destination lines it writes to stdout.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Two players, two drones each, two zones; we are player 0.
const SETUP: &str = "2 0 2 2\n1000 900\n3000 900\n";

/// Both zones neutral, our drones near the middle, rival drones in the far corners.
const TURN: &str = "-1\n-1\n2000 900\n1300 900\n3900 100\n3900 1700\n";

fn spawn(exe: &str, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start binary");

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input.as_bytes()).unwrap();
    stdin.flush().unwrap();
    drop(stdin);

    child.wait_with_output().expect("failed to wait on child")
}

/// Runs the bot on a session and collects stdout lines.
fn run_bot(args: &[&str], input: &str) -> (bool, Vec<String>) {
    let output = spawn(env!("CARGO_BIN_EXE_drone-commander"), args, input);
    (output.status.success(), stdout_lines(&output))
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn one_line_per_drone_per_turn() {
    let input = format!("{}{}{}{}", SETUP, TURN, TURN, TURN);
    let (ok, lines) = run_bot(&[], &input);
    assert!(ok);
    assert_eq!(lines.len(), 6);
}

#[test]
fn drones_split_across_open_zones() {
    let input = format!("{}{}", SETUP, TURN);
    let (ok, lines) = run_bot(&[], &input);
    assert!(ok);
    assert_eq!(lines, vec!["3000 900", "1000 900"]);
}

#[test]
fn lines_are_integer_pairs_on_the_board() {
    let turn = "0\n1\n100 100\n3900 1700\n2000 900\n2100 900\n";
    let input = format!("{}{}{}", SETUP, turn, turn);
    let (ok, lines) = run_bot(&["--jitter", "50", "--seed", "3"], &input);
    assert!(ok);
    assert_eq!(lines.len(), 4);
    for line in &lines {
        let parts: Vec<i32> = line.split(' ').map(|t| t.parse().unwrap()).collect();
        assert_eq!(parts.len(), 2, "bad line: {}", line);
        assert!((0..4000).contains(&parts[0]), "x off board: {}", line);
        assert!((0..1800).contains(&parts[1]), "y off board: {}", line);
    }
}

#[test]
fn empty_input_exits_cleanly() {
    let (ok, lines) = run_bot(&[], "");
    assert!(ok);
    assert!(lines.is_empty());
}

#[test]
fn malformed_input_fails_after_answered_turns() {
    let input = format!("{}{}-1\nnot-a-number\n", SETUP, TURN);
    let (ok, lines) = run_bot(&[], &input);
    assert!(!ok);
    assert_eq!(lines.len(), 2);
}

#[test]
fn off_board_drone_ends_the_game_with_an_error() {
    let turn = "-1\n-1\n-2147483648 0\n1300 900\n3900 100\n3900 1700\n";
    let input = format!("{}{}{}", SETUP, TURN, turn);
    let output = spawn(env!("CARGO_BIN_EXE_drone-commander"), &[], &input);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output).len(), 2);
}

#[test]
fn unknown_flag_is_rejected() {
    let output = spawn(env!("CARGO_BIN_EXE_drone-commander"), &["--bogus"], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn config_file_is_applied() {
    let path = temp_file(
        "nearest_zone.json",
        r#"{"fallback": "nearest_zone", "hold_the_line": false}"#,
    );
    let input = format!("{}{}", SETUP, TURN);
    let (ok, lines) = run_bot(&["--config", path.to_str().unwrap()], &input);
    assert!(ok);
    assert_eq!(lines, vec!["3000 900", "1000 900"]);
}

#[test]
fn missing_config_file_is_an_error() {
    let output = spawn(
        env!("CARGO_BIN_EXE_drone-commander"),
        &["--config", "/nonexistent/drone-commander.json"],
        "",
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn replay_matches_live_turn() {
    let path = temp_file("snapshot.txt", &format!("{}{}", SETUP, TURN));
    let output = spawn(
        env!("CARGO_BIN_EXE_replay"),
        &[path.to_str().unwrap()],
        "",
    );
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["3000 900", "1000 900"]);
}

#[test]
fn replay_rejects_truncated_snapshot() {
    let path = temp_file("truncated.txt", &format!("{}-1\n", SETUP));
    let output = spawn(
        env!("CARGO_BIN_EXE_replay"),
        &[path.to_str().unwrap()],
        "",
    );
    assert_eq!(output.status.code(), Some(2));
}
