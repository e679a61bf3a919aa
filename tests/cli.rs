use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_npuzzle-solver");

fn run(input: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(BIN)
        .arg(input)
        .arg(output)
        .arg("--quiet")
        .args(extra)
        .output()
        .unwrap()
}

fn write_puzzle(dir: &Path, tiles: &str) -> std::path::PathBuf {
    let path = dir.join("puzzle.txt");
    fs::write(&path, format!("#k\n3\n#initial state\n{tiles}\n")).unwrap();
    path
}

#[test]
fn writes_moves() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_puzzle(dir.path(), "1 2 3 4 5 6 0 7 8");
    let output = dir.path().join("answer.txt");
    for strategy in ["bfs", "astar"] {
        let got = run(&input, &output, &["--strategy", strategy]);
        assert!(got.status.success(), "{got:?}");
        assert_eq!(fs::read_to_string(&output).unwrap(), "#moves\n7 8 \n");
    }
}

#[test]
fn writes_no_solution() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_puzzle(dir.path(), "1 2 3 4 5 6 8 7 0");
    let output = dir.path().join("answer.txt");
    let got = run(&input, &output, &[]);
    assert!(got.status.success(), "{got:?}");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "#moves\nno solution\n",
    );
}

#[test]
fn failed_search_leaves_no_answer() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_puzzle(dir.path(), "0 1 2 3 4 5 6 7 8");
    let output = dir.path().join("answer.txt");
    let got = run(&input, &output, &["--max-nodes", "3"]);
    assert!(!got.status.success());
    assert!(!output.exists());

    // An answer from an earlier run is kept as is.
    fs::write(&output, "#moves\nno solution\n").unwrap();
    let got = run(&input, &output, &["--max-nodes", "3"]);
    assert!(!got.status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "#moves\nno solution\n",
    );
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("answer.txt");
    let got = run(&dir.path().join("missing.txt"), &output, &[]);
    assert!(!got.status.success());
    assert!(!output.exists());
}
