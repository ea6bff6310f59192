use std::io::Write;
use std::path::Path;

use filefeed::app::{run, ExitStatus, LINES_DONE, WHOLE_FILE_DONE};
use filefeed::{read_all, read_lines, ErrorKind, ReadResult};
use proptest::prelude::*;
use tempfile::{NamedTempFile, TempDir};

struct Captured {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

fn invoke(args: &[&str]) -> Captured {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = run(args.iter().copied(), &mut stdout, &mut stderr).expect("in-memory writers");

    Captured {
        status,
        stdout: String::from_utf8(stdout).expect("stdout is utf-8"),
        stderr: String::from_utf8(stderr).expect("stderr is utf-8"),
    }
}

fn temp_file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write contents");
    file.flush().expect("flush contents");
    file
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are utf-8")
}

fn assert_help(captured: &Captured) {
    assert_eq!(captured.status, ExitStatus::Success);
    assert!(captured.stderr.is_empty());
    for needle in ["Usage:", "--file", "--help", "Examples:", "Exit Codes:", "0", "1"] {
        assert!(
            captured.stdout.contains(needle),
            "help output is missing {needle:?}:\n{}",
            captured.stdout
        );
    }
}

#[test]
fn no_arguments_prints_help() {
    assert_help(&invoke(&[]));
}

#[test]
fn help_flag_prints_help() {
    assert_help(&invoke(&["--help"]));
    assert_help(&invoke(&["-h"]));
}

#[test]
fn unknown_flag_falls_through_to_help() {
    assert_help(&invoke(&["--unknown"]));
}

#[test]
fn hello_world_file_is_echoed_twice() {
    let file = temp_file_with("Hello, World!");
    let captured = invoke(&["--file", path_str(file.path())]);

    assert_eq!(captured.status, ExitStatus::Success);
    assert!(captured.stderr.is_empty());
    assert_eq!(captured.stdout.matches("Hello, World!").count(), 2);
    assert!(captured.stdout.contains(WHOLE_FILE_DONE));
    assert!(captured.stdout.contains(LINES_DONE));

    let whole_at = captured.stdout.find(WHOLE_FILE_DONE).expect("whole marker");
    let lines_at = captured.stdout.find(LINES_DONE).expect("lines marker");
    assert!(whole_at < lines_at);
}

#[test]
fn short_file_flag_works() {
    let file = temp_file_with("one\ntwo\n");
    let captured = invoke(&["-f", path_str(file.path())]);

    assert_eq!(captured.status, ExitStatus::Success);
    assert!(captured.stdout.contains("(2 lines)"));
}

#[test]
fn missing_file_reports_error_and_exits_one() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("nope.txt");
    let missing = path_str(&missing);

    let captured = invoke(&["--file", missing]);

    assert_eq!(captured.status, ExitStatus::ReadError);
    assert_eq!(captured.status.code(), 1);
    assert_eq!(
        captured.stderr,
        format!("Error reading file '{missing}': file not found\n")
    );
    assert!(!captured.stdout.contains(WHOLE_FILE_DONE));
    assert!(!captured.stdout.contains(LINES_DONE));
}

#[test]
fn directory_fails_the_same_way_in_both_readers() {
    let dir = TempDir::new().expect("create temp dir");

    assert_eq!(
        read_all(dir.path(), |_| ()),
        ReadResult::Failure(ErrorKind::IsADirectory)
    );
    assert_eq!(
        read_lines(dir.path(), |_| ()),
        ReadResult::Failure(ErrorKind::IsADirectory)
    );

    let captured = invoke(&["-f", path_str(dir.path())]);
    assert_eq!(captured.status, ExitStatus::ReadError);
    assert!(captured.stderr.ends_with(": is a directory\n"));
}

#[test]
fn empty_file_succeeds() {
    let file = temp_file_with("");
    let mut whole_calls = 0;
    let mut line_calls = 0;

    assert_eq!(
        read_all(file.path(), |_| whole_calls += 1),
        ReadResult::Success(String::new())
    );
    assert_eq!(
        read_lines(file.path(), |_| line_calls += 1),
        ReadResult::Success(Vec::new())
    );
    assert_eq!(whole_calls, 1);
    assert_eq!(line_calls, 0);

    let captured = invoke(&["--file", path_str(file.path())]);
    assert_eq!(captured.status, ExitStatus::Success);
    assert!(captured.stdout.contains("(0 bytes)"));
    assert!(captured.stdout.contains("(0 lines)"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn lines_join_back_to_trimmed_content(
        mut lines in prop::collection::vec("([ -~]{0,30}[!-~])?", 0..16),
        last in "[!-~]{1,10}",
        trailing_newline in any::<bool>(),
    ) {
        lines.push(last);
        let mut content = lines.join("\n");
        if trailing_newline {
            content.push('\n');
        }
        let file = temp_file_with(&content);

        let whole = read_all(file.path(), |_| ()).success().expect("whole read");
        let streamed = read_lines(file.path(), |_| ()).success().expect("line read");

        prop_assert_eq!(&whole, &content);
        prop_assert_eq!(&streamed, &lines);
        prop_assert_eq!(streamed.join("\n"), whole.trim_end());
    }
}
