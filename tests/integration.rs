use std::path::Path;
use std::process::{Command, Output};

fn linkcheck(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linkcheck"));
    cmd.arg("--root").arg(root);
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn empty_tree_is_clean() {
    let dir = tempfile::tempdir().unwrap();

    let output = linkcheck(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No broken relative links found.\n");
}

#[test]
fn valid_links_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", "[Home](b.md)\n[Ext](https://example.com/x)\n[Top](#top)\n");
    write(dir.path(), "b.md", "# B\n");
    write(dir.path(), "docs/a.md", "[Sec](../docs/b.md#intro)\n");
    write(dir.path(), "docs/b.md", "# Intro\n");

    let output = linkcheck(dir.path()).output().unwrap();
    assert_eq!(
        output.status.code(),
        Some(0),
        "stdout: {}\nstderr: {}",
        stdout(&output),
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output), "No broken relative links found.\n");
}

#[test]
fn broken_links_are_reported_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "z.md", "[Gone](gone.md)\n");
    write(dir.path(), "a.md", "ok\n[Missing](missing.md) and [Also](./also.md#x)\n");
    write(dir.path(), "docs/clean.md", "[Up](../z.md)\n");

    let output = linkcheck(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\na.md\n  - line 2: \"Missing\" -> missing.md\n  - line 2: \"Also\" -> ./also.md#x\n\
         \nz.md\n  - line 1: \"Gone\" -> gone.md\n\
         \nTotal broken links: 3\n"
    );
}

#[test]
fn sibling_file_sorts_before_same_named_directory() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["docs/a.md", "docs.md", "a/b.md", "a-b.md"] {
        write(dir.path(), name, "[x](nowhere.md)\n");
    }

    let output = linkcheck(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let headers: Vec<String> = stdout(&output)
        .lines()
        .filter(|line| line.ends_with(".md") && !line.starts_with(' '))
        .map(String::from)
        .collect();
    assert_eq!(headers, vec!["a-b.md", "a/b.md", "docs.md", "docs/a.md"]);
}

#[test]
fn ignored_directories_do_not_count() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "node_modules/pkg/README.md", "[x](nowhere.md)\n");
    write(dir.path(), "_site/index.md", "[x](nowhere.md)\n");
    write(dir.path(), ".git/notes.md", "[x](nowhere.md)\n");

    let output = linkcheck(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn json_report_matches_text_findings() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "docs/a.md", "[Missing](missing.md)\n");
    write(dir.path(), "docs/b.md", "fine\n");

    let output = linkcheck(dir.path()).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["documents_scanned"], 2);
    assert_eq!(value["total_broken"], 1);
    assert_eq!(value["files"][0]["path"], "docs/a.md");
    assert_eq!(value["files"][0]["broken"][0]["line"], 1);
    assert_eq!(value["files"][0]["broken"][0]["label"], "Missing");
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let output = linkcheck(&dir.path().join("absent")).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "no report on fatal errors");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Traversal Failed"));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_fatal() {
    use std::os::unix::fs::PermissionsExt as _;

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", "[ok](locked)\n");
    let locked = dir.path().join("locked");
    std::fs::create_dir(&locked).unwrap();
    write(&locked, "inner.md", "");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through mode bits; nothing to observe then.
    if std::fs::read_dir(&locked).is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = linkcheck(dir.path()).output().unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("locked"));
}
