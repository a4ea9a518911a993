//! End-to-end CLI tests for speechbridge.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Command running in `dir`, so the default config lookup stays isolated.
fn speechbridge(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("speechbridge");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

const DEPLOYABLE_CONFIG: &str = r#"
[contact]
phone = "+44 20 7946 0000"
booking_url = "https://cal.example/speechbridge"
region_list_url = "https://speechbridge.co.uk/dubai-partners"

[documents]
"Mealtime posture checklist (PDF)" = "/docs/mealtime-posture.pdf"
"Early communication tips (PDF)" = "/docs/early-communication.pdf"
"AAC first steps for families (PDF)" = "/docs/aac-first-steps.pdf"
"Communication friendly classroom checklist (PDF)" = "/docs/classroom-checklist.pdf"
"Safe swallow plan example (PDF)" = "/docs/safe-swallow.pdf"
"Supervision agreement template (DOCX)" = "/docs/supervision-agreement.docx"
"#;

fn write_config(dir: &TempDir, body: &str) {
    std::fs::write(dir.path().join("speechbridge.toml"), body).expect("write config");
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path()).assert().failure();
    }
}

// ============================================
// build
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_index_html_to_out_dir() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path())
            .args(["build", "--out", "site-out"])
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = std::fs::read_to_string(temp.path().join("site-out/index.html"))
            .expect("index.html written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Speechbridge"));
        assert!(html.contains(r#"id="contact""#));
    }

    #[test]
    fn defaults_to_dist() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path()).arg("build").assert().success();
        assert!(temp.path().join("dist/index.html").exists());
    }

    #[test]
    fn warns_about_placeholders_on_stderr() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path())
            .arg("build")
            .assert()
            .success()
            .stderr(predicate::str::contains("placeholder"));
    }

    #[test]
    fn honours_config_out_dir_and_contact() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
[contact]
email = "office@example.org"

[build]
out_dir = "public"
"#,
        );

        speechbridge(temp.path()).arg("build").assert().success();

        let html = std::fs::read_to_string(temp.path().join("public/index.html"))
            .expect("index.html written");
        assert!(html.contains("mailto:office@example.org"));
        assert!(!html.contains("mailto:hello@speechbridge.co.uk"));
    }

    #[test]
    fn out_flag_beats_config_out_dir() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[build]\nout_dir = \"public\"\n");

        speechbridge(temp.path())
            .args(["build", "--out", "override"])
            .assert()
            .success();

        assert!(temp.path().join("override/index.html").exists());
        assert!(!temp.path().join("public").exists());
    }
}

// ============================================
// check
// ============================================

mod check {
    use super::*;

    #[test]
    fn default_site_is_sound() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("placeholders remain"));
    }

    #[test]
    fn strict_fails_while_placeholders_remain() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path())
            .args(["check", "--strict"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("placeholder phone number"));
    }

    #[test]
    fn strict_passes_with_complete_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, DEPLOYABLE_CONFIG);

        speechbridge(temp.path())
            .args(["check", "--strict"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ready to deploy"));
    }

    #[test]
    fn json_report_is_machine_readable() {
        let temp = TempDir::new().expect("temp dir");
        let output = speechbridge(temp.path())
            .args(["check", "--json"])
            .output()
            .expect("run check");
        assert!(output.status.success());

        let report: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("valid JSON report");
        assert_eq!(report["dangling_anchors"], serde_json::json!([]));
        assert_eq!(report["duplicate_ids"], serde_json::json!([]));
        assert_eq!(report["placeholder_links"][0]["href"], "#");
        assert_eq!(report["placeholder_links"][0]["count"], 8);
        assert_eq!(
            report["mailto_addresses"],
            serde_json::json!(["hello@speechbridge.co.uk"])
        );
    }
}

// ============================================
// content and config errors
// ============================================

mod content {
    use super::*;

    #[test]
    fn prints_effective_content() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[contact]\nphone = \"+44 20 7946 0000\"\n");

        let output = speechbridge(temp.path())
            .arg("content")
            .output()
            .expect("run content");
        assert!(output.status.success());

        let content: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("valid JSON content");
        assert_eq!(content["brand"], "Speechbridge");
        assert_eq!(content["contact"]["phone"], "+44 20 7946 0000");
        assert_eq!(content["nav"].as_array().map(Vec::len), Some(9));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        speechbridge(temp.path())
            .args(["content", "--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.toml"));
    }

    #[test]
    fn explicit_malformed_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("bad.toml"), "[contact\n").expect("write");
        speechbridge(temp.path())
            .args(["check", "--config", "bad.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }

    #[test]
    fn malformed_default_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[contact\n");
        speechbridge(temp.path())
            .arg("content")
            .assert()
            .success()
            .stdout(predicate::str::contains("hello@speechbridge.co.uk"));
    }

    #[test]
    fn invalid_email_is_rejected() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[contact]\nemail = \"not an address\"\n");
        speechbridge(temp.path())
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid site content"));
        assert!(!temp.path().join("dist").exists());
    }
}
