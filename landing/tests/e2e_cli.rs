//! End-to-end tests for the `binay-landing` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn landing() -> Command {
    cargo_bin_cmd!("binay-landing")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        landing()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("links"));
    }

    #[test]
    fn shows_version() {
        landing()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod render {
    use super::*;

    #[test]
    fn default_command_writes_dist_index() {
        let temp = TempDir::new().expect("temp dir");
        landing().current_dir(temp.path()).assert().success();

        let html = std::fs::read_to_string(temp.path().join("dist/index.html"))
            .expect("page written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("The Complete Platform for Your Mobile Needs"));
    }

    #[test]
    fn flags_choose_output_path() {
        let temp = TempDir::new().expect("temp dir");
        landing()
            .current_dir(temp.path())
            .args(["render", "--out-dir", "public", "--file-name", "home.html"])
            .assert()
            .success();

        assert!(temp.path().join("public/home.html").is_file());
        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn stdout_flag_prints_document() {
        let temp = TempDir::new().expect("temp dir");
        landing()
            .current_dir(temp.path())
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("4.8 out of 5 stars"));

        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn stdout_matches_library_render() {
        let temp = TempDir::new().expect("temp dir");
        let output = landing()
            .current_dir(temp.path())
            .args(["render", "--stdout"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(String::from_utf8(output).expect("utf-8"), binay_landing::render_page());
    }
}

mod closed_pipe {
    use std::io::Read;
    use std::process::{Command, Stdio};
    use tempfile::TempDir;

    fn spawn_piped(temp: &TempDir, args: &[&str]) -> std::process::Child {
        Command::new(env!("CARGO_BIN_EXE_binay-landing"))
            .current_dir(temp.path())
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn binay-landing")
    }

    #[test]
    fn reader_stopping_early_is_not_a_panic() {
        let temp = TempDir::new().expect("temp dir");
        let mut child = spawn_piped(&temp, &["render", "--stdout"]);

        let mut stdout = child.stdout.take().expect("stdout");
        let mut head = [0u8; 10];
        stdout.read_exact(&mut head).expect("read prefix");
        assert_eq!(&head[..], b"<!DOCTYPE ");
        drop(stdout);

        let output = child.wait_with_output().expect("wait");
        assert_ne!(output.status.code(), Some(101));
        assert!(output.status.success());
        assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
    }

    #[test]
    fn reader_gone_before_output_exits_cleanly() {
        let temp = TempDir::new().expect("temp dir");
        for args in [&["render", "--stdout"][..], &["content"], &["links"]] {
            let mut child = spawn_piped(&temp, args);
            drop(child.stdout.take());

            let output = child.wait_with_output().expect("wait");
            assert!(output.status.success(), "{args:?}: {:?}", output.status);
            assert!(
                !String::from_utf8_lossy(&output.stderr).contains("panicked"),
                "{args:?}"
            );
        }
    }
}

mod config {
    use super::*;

    #[test]
    fn config_file_sets_output() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("landing.toml"),
            "out_dir = \"site\"\nfile_name = \"landing.html\"\n",
        )
        .expect("write config");

        landing().current_dir(temp.path()).assert().success();
        assert!(temp.path().join("site/landing.html").is_file());
    }

    #[test]
    fn flags_override_config_file() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("landing.toml"), "out_dir = \"site\"\n")
            .expect("write config");

        landing()
            .current_dir(temp.path())
            .args(["render", "--out-dir", "cli"])
            .assert()
            .success();
        assert!(temp.path().join("cli/index.html").is_file());
        assert!(!temp.path().join("site").exists());
    }

    #[test]
    fn explicit_config_path() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("custom.toml");
        std::fs::write(&config, "out_dir = \"custom\"\n").expect("write config");

        landing()
            .current_dir(temp.path())
            .arg("--config")
            .arg(&config)
            .assert()
            .success();
        assert!(temp.path().join("custom/index.html").is_file());
    }

    #[test]
    fn malformed_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("landing.toml"), "out_dir = [").expect("write config");

        landing()
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config"));
    }
}

mod inspection {
    use super::*;

    #[test]
    fn content_prints_json() {
        let temp = TempDir::new().expect("temp dir");
        let output = landing()
            .current_dir(temp.path())
            .arg("content")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let value: serde_json::Value =
            serde_json::from_slice(&output).expect("content is JSON");
        assert_eq!(
            value["hero"]["headline"],
            "The Complete Platform for Your Mobile Needs"
        );
        assert_eq!(value["features"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn links_lists_store_and_images() {
        let temp = TempDir::new().expect("temp dir");
        landing()
            .current_dir(temp.path())
            .arg("links")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "link\thttps://play.google.com/store/apps/details?id=com.binaytech.app",
            ))
            .stdout(predicate::str::contains(
                "image\t/assets/construction-icon.webp\t120x120",
            ));
    }
}
