use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time must be after UNIX_EPOCH")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "postmd_cli_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ));
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_postmd"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_renders_file_to_stdout() {
    let dir = temp_dir("stdout");
    let input = dir.join("post.md");
    std::fs::write(&input, "# Hi\n- *a*\n").expect("failed to write input");

    let output = Command::new(env!("CARGO_BIN_EXE_postmd"))
        .arg(&input)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_dir_all(&dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "<h1>Hi</h1>\n<ul><li><em>a</em></li></ul>");
}

#[test]
fn test_cli_renders_post_by_id_with_escaping() {
    let dir = temp_dir("post");
    std::fs::write(dir.join("1.md"), "a <b>").expect("failed to write post");
    let out_file = dir.join("out.html");

    let output = Command::new(env!("CARGO_BIN_EXE_postmd"))
        .arg(&dir)
        .arg(&out_file)
        .args(["--post", "1", "--escape-html"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let html = std::fs::read_to_string(&out_file).expect("output file should exist");
    let _ = std::fs::remove_dir_all(&dir);
    assert_eq!(html, "<p>a &lt;b&gt;</p>");
}

#[test]
fn test_cli_unknown_post_fails() {
    let dir = temp_dir("missing");

    let output = Command::new(env!("CARGO_BIN_EXE_postmd"))
        .arg(&dir)
        .args(["--post", "nope"])
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_dir_all(&dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Post not found: nope"));
}
