//! Integration tests for the stdl binary


use harness::{TestTree, run_stdl, sorted_lines};

#[test]
fn test_hms_formats_seconds() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_stdl(tree.path(), &["hms", "3661.5", "--ms"]);
    assert!(success);
    assert_eq!(stdout.trim(), "01:01:01.500");

    let (stdout, _stderr, success) = run_stdl(tree.path(), &["hms", "90321.789"]);
    assert!(success);
    assert_eq!(stdout.trim(), "25:05:21");
}

#[test]
fn test_hms_negative_input() {
    let tree = TestTree::new();
    let (stdout, stderr, success) = run_stdl(tree.path(), &["hms", "-123.456", "--ms"]);
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout.trim(), "-00:02:03.456");
}

#[test]
fn test_hms_large_input_keeps_growing_hours() {
    let tree = TestTree::new();
    let (stdout, stderr, success) = run_stdl(tree.path(), &["hms", "1e13"]);
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout.trim(), "2777777777:46:40");
}

#[test]
fn test_seconds_parses_text() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_stdl(tree.path(), &["seconds", "2:3"]);
    assert!(success);
    assert_eq!(stdout.trim(), "123");

    let (stdout, _stderr, success) = run_stdl(tree.path(), &["seconds", "-1:02:03"]);
    assert!(success);
    assert_eq!(stdout.trim(), "-3723");
}

#[test]
fn test_seconds_rejects_out_of_range() {
    let tree = TestTree::new();
    let (stdout, stderr, success) = run_stdl(tree.path(), &["seconds", "1:02:60"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid time format"), "stderr: {}", stderr);
}

#[test]
fn test_seconds_human_spans() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_stdl(tree.path(), &["seconds", "--human", "1h 30m"]);
    assert!(success);
    assert_eq!(stdout.trim(), "5400");
}

#[test]
fn test_files_recursive_with_extension() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    tree.add_file("sub/b.txt", "b");
    tree.add_file("sub/c.rs", "c");

    let (stdout, _stderr, success) =
        run_stdl(tree.path(), &["files", ".", "-e", ".txt", "--relative"]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec!["./a.txt", "./sub/b.txt"]);
}

#[test]
fn test_files_non_recursive() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    tree.add_file("sub/b.txt", "b");

    let (stdout, _stderr, success) =
        run_stdl(tree.path(), &["files", ".", "--no-recursive", "--relative"]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec!["./a.txt"]);
}

#[test]
fn test_files_absolute_by_default() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");

    let (stdout, _stderr, success) = run_stdl(tree.path(), &["files", "."]);
    assert!(success);
    let line = stdout.lines().next().expect("one path");
    assert!(std::path::Path::new(line).is_absolute(), "{}", line);
    assert!(line.ends_with("a.txt"));
}

#[test]
fn test_files_preset() {
    let tree = TestTree::new();
    tree.add_file("song.MP3", "");
    tree.add_file("photo.jpg", "");
    tree.add_file("notes.txt", "");

    let (stdout, _stderr, success) =
        run_stdl(tree.path(), &["files", ".", "--preset", "audio", "--relative"]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec!["./song.MP3"]);
}

#[test]
fn test_files_json() {
    let tree = TestTree::new();
    tree.add_file("a.csv", "");
    tree.add_file("b.txt", "");

    let (stdout, _stderr, success) =
        run_stdl(tree.path(), &["files", ".", "-e", "csv", "--relative", "--json"]);
    assert!(success);
    let parsed: Vec<String> = serde_json::from_str(&stdout).expect("valid JSON array");
    assert_eq!(parsed.len(), 1);
    assert!(parsed[0].ends_with("a.csv"));
}

#[test]
fn test_files_missing_directory() {
    let tree = TestTree::new();
    let (_stdout, stderr, success) = run_stdl(tree.path(), &["files", "missing"]);
    assert!(!success);
    assert!(stderr.starts_with("stdl: listing files in missing"), "stderr: {}", stderr);
}

#[test]
fn test_dirs_listing() {
    let tree = TestTree::new();
    tree.add_dir("a/b");
    tree.add_dir("c");
    tree.add_file("a/file.txt", "");

    let (stdout, _stderr, success) = run_stdl(tree.path(), &["dirs", ".", "--relative"]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec!["./a", "./a/b", "./c"]);

    let (stdout, _stderr, success) =
        run_stdl(tree.path(), &["dirs", ".", "--relative", "--no-recursive"]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec!["./a", "./c"]);
}

#[test]
fn test_usage_summary() {
    let tree = TestTree::new();
    tree.add_file("a.bin", &"x".repeat(1024));
    tree.add_file("sub/b.bin", &"x".repeat(512));

    let (stdout, _stderr, success) = run_stdl(tree.path(), &["usage", "."]);
    assert!(success);
    assert!(stdout.contains("Files:        2"), "{}", stdout);
    assert!(stdout.contains("Directories:  1"), "{}", stdout);
    assert!(stdout.contains("1.5 KB (1,536 bytes)"), "{}", stdout);
}

#[test]
fn test_usage_json() {
    let tree = TestTree::new();
    tree.add_file("a.bin", "12345");

    let (stdout, _stderr, success) = run_stdl(tree.path(), &["usage", ".", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["files"], 1);
    assert_eq!(value["bytes"], 5);
    assert_eq!(value["readable"], "5.0 B");
}

#[test]
fn test_size_parsing() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_stdl(tree.path(), &["size", "1.5 KB"]);
    assert!(success);
    assert_eq!(stdout.trim(), "1536");

    let (stdout, _stderr, success) = run_stdl(tree.path(), &["size", "1.5kb", "--decimal"]);
    assert!(success);
    assert_eq!(stdout.trim(), "1500");

    let (_stdout, stderr, success) = run_stdl(tree.path(), &["size", "lots"]);
    assert!(!success);
    assert!(stderr.contains("invalid size format"), "stderr: {}", stderr);
}

#[test]
fn test_days() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_stdl(tree.path(), &["days", "2022-11-19", "2022-11-22"]);
    assert!(success);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["2022-11-19", "2022-11-20", "2022-11-21"]
    );
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");

    let (stdout, stderr, success) =
        run_stdl(tree.path(), &["-vvv", "files", ".", "--relative"]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec!["./a.txt"]);
    assert!(stderr.contains("scanning directory"), "stderr: {}", stderr);
}
