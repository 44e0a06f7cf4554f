use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Project with an explicit config and a small content tree
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let content = dir.path().join("content");
    fs::create_dir_all(content.join("posts")).unwrap();
    fs::write(content.join("whoami.md"), "# Ada\n").unwrap();
    fs::write(content.join("about.md"), "# About me\n").unwrap();
    fs::write(content.join("posts/hello.md"), "# Hello *world*\n").unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[content]\nroot = \"content\"\n",
    )
    .unwrap();
    dir
}

fn termfolio(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("termfolio").unwrap();
    cmd.current_dir(dir)
        .env_remove("TERMFOLIO_CONTENT")
        .env_remove("TERMFOLIO_HOME")
        .env_remove("TERMFOLIO_GITHUB")
        .env_remove("TERMFOLIO_LOG")
        .arg("--config")
        .arg(dir.join("config.toml"));
    cmd
}

#[test]
fn ls_lists_root_entries() {
    let dir = project();
    termfolio(dir.path())
        .args(["run", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory Contents"))
        .stdout(predicate::str::contains(r#"href="/posts""#))
        .stdout(predicate::str::contains(r#"href="/about""#));
}

#[test]
fn cat_renders_markdown_relative_to_cwd() {
    let dir = project();
    termfolio(dir.path())
        .args(["--cwd", "/posts", "run", "cat hello.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Hello <em>world</em></h1>"));
}

#[test]
fn whoami_prints_configured_document() {
    let dir = project();
    termfolio(dir.path())
        .args(["run", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Ada</h1>"));
}

#[test]
fn unknown_command_fails_with_error_fragment() {
    let dir = project();
    termfolio(dir.path())
        .args(["run", "frobnicate"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("command not found: frobnicate"))
        .stdout(predicate::str::contains("text-terminal-red"));
}

#[test]
fn json_reports_error_kind() {
    let dir = project();
    let output = termfolio(dir.path())
        .args(["run", "--json", "cd nowhere"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["ok"], false);
    assert_eq!(value["error"]["kind"], "path_not_found");
}

#[test]
fn json_reports_navigation_intent() {
    let dir = project();
    let output = termfolio(dir.path())
        .args(["run", "--json", "cd posts"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["output"]["kind"], "navigate");
    assert_eq!(value["output"]["path"], "/posts");
}

#[test]
fn run_reads_line_from_stdin() {
    let dir = project();
    termfolio(dir.path())
        .arg("run")
        .write_stdin("echo piped input\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("piped input"));
}

#[test]
fn shell_keeps_session_between_lines() {
    let dir = project();
    termfolio(dir.path())
        .arg("shell")
        .write_stdin("cd posts\npwd\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("/home/x0/posts"));
}

#[test]
fn commands_lists_registry() {
    let dir = project();
    termfolio(dir.path())
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("17 commands, 3 documents"));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("termfolio")
        .unwrap()
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "run", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn init_then_run() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("termfolio")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(dir.path().join(".termfolio/config.toml").exists());
    Command::cargo_bin("termfolio")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("TERMFOLIO_CONTENT")
        .args(["run", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Hello</h1>"));
}

#[test]
fn piped_script_shares_one_session() {
    let dir = project();
    termfolio(dir.path())
        .arg("run")
        .write_stdin("# tour\ncd posts\n\npwd\nls\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("/home/x0/posts"))
        .stdout(predicate::str::contains(r#"href="/posts/hello""#));
}

#[test]
fn piped_script_json_is_an_array() {
    let dir = project();
    let output = termfolio(dir.path())
        .args(["run", "--json"])
        .write_stdin("cd posts\ncat missing.md\n")
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["output"]["kind"], "navigate");
    assert_eq!(value[1]["error"]["kind"], "document_not_found");
}

#[test]
fn shell_survives_deeply_nested_calc() {
    let dir = project();
    let script = format!(
        "calc {}1\ncalc {}1\necho still here\nexit\n",
        "-".repeat(500_000),
        "(".repeat(100_000)
    );
    termfolio(dir.path())
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("nested too deeply"))
        .stdout(predicate::str::contains("still here"));
}

#[test]
fn ls_inside_page_without_content() {
    let dir = project();
    termfolio(dir.path())
        .arg("shell")
        .write_stdin("cd contact\nls\ntree\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory Contents: /contact"))
        .stdout(predicate::str::contains("cannot access").not());
}

#[cfg(target_os = "linux")]
#[test]
fn project_config_layers_over_global() {
    let dir = project();
    let xdg = dir.path().join("xdg");
    fs::create_dir_all(xdg.join("termfolio")).unwrap();
    fs::write(
        xdg.join("termfolio/config.toml"),
        "[system]\nuname = \"GlobalOS\"\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join(".termfolio")).unwrap();
    fs::write(
        dir.path().join(".termfolio/config.toml"),
        "[shell]\nhome = \"/home/guest\"\n",
    )
    .unwrap();

    let run = |line: &str| {
        Command::cargo_bin("termfolio")
            .unwrap()
            .current_dir(dir.path())
            .env("XDG_CONFIG_HOME", &xdg)
            .env_remove("TERMFOLIO_CONTENT")
            .env_remove("TERMFOLIO_HOME")
            .args(["run", line])
            .assert()
            .success()
    };
    run("uname").stdout(predicate::str::contains("GlobalOS"));
    run("pwd").stdout(predicate::str::contains("/home/guest"));
}
