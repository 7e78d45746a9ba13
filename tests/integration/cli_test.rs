//! CLI tests
//!
//! Runs the actual binary and checks stdout, stderr and exit status.

use predicates::prelude::*;
use predicates::str::contains;

use crate::helpers::{colorexpansi, write_config};

#[test]
fn help_lists_subcommands() {
    let (_home, mut cmd) = colorexpansi();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("render"))
        .stdout(contains("sequence"))
        .stdout(contains("idents"))
        .stdout(contains("config"))
        .stdout(contains("completions"));
}

#[test]
fn sequence_escaped_by_default() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["sequence", "r.g+i-u"])
        .assert()
        .success()
        .stdout("\\x1b[31;42;3;24m\n");
}

#[test]
fn sequence_raw_emits_escape_bytes() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["sequence", "r", "--show", "raw"])
        .assert()
        .success()
        .stdout("\x1b[31m");
}

#[test]
fn sequence_arguments() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["sequence", "--show", "arguments", "y.b+bu"])
        .assert()
        .success()
        .stdout("33;44;1;4\n");
}

#[test]
fn sequence_json() {
    let (_home, mut cmd) = colorexpansi();
    let output = cmd
        .args(["sequence", ".c-s", "--show", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "concatenation");
    assert_eq!(json["parts"][0]["region"], "background");
    assert_eq!(json["parts"][1]["kind"], "mode");
    assert_eq!(json["parts"][1]["mode"], "strike");
    assert_eq!(json["parts"][1]["set"], false);
}

#[test]
fn sequence_accepts_mode_only_spec() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["sequence", "-u"])
        .assert()
        .success()
        .stdout("\\x1b[24m\n");
}

#[test]
fn sequence_rejects_invalid_spec() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["sequence", "z"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("invalid color specification: 'z'"));
}

#[test]
fn render_positional_and_named() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["render", "{0:>4$g} {who}", "7", "who=ada"])
        .assert()
        .success()
        .stdout("\x1b[32m   7\x1b[0m ada\n");
}

#[test]
fn render_with_separator_override() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["render", "--separator", "@", "{0:@r}", "$5"])
        .assert()
        .success()
        .stdout("\x1b[31m$5\x1b[0m\n");
}

#[test]
fn render_rejects_reserved_separator_override() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["render", "--separator", "<", "{0:<5<r}", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("reserved"));
}

#[test]
fn render_uses_configured_separator() {
    let (home, mut cmd) = colorexpansi();
    write_config(&home, "[format]\nseparator = \"|\"\n");
    cmd.args(["render", "{0:|b}", "x"])
        .assert()
        .success()
        .stdout("\x1b[34mx\x1b[0m\n");
}

#[test]
fn render_reports_template_errors() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["render", "{missing}"])
        .assert()
        .failure()
        .stderr(contains("missing field 'missing'"));
}

#[test]
fn render_reports_bad_color_spec() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["render", "{0:$rg}", "x"])
        .assert()
        .failure()
        .stderr(contains("invalid color specification: 'rg'"));
}

#[test]
fn render_reports_oversized_precision() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["render", "{0:.70000f}", "1.5"])
        .assert()
        .failure()
        .stderr(contains("precision too big"))
        .stderr(contains("panicked").not());
}

#[test]
fn invalid_config_is_reported() {
    let (home, mut cmd) = colorexpansi();
    write_config(&home, "[format]\nseparator = \"+\"\n");
    cmd.args(["render", "x"])
        .assert()
        .failure()
        .stderr(contains("reserved"));
}

#[test]
fn idents_lists_tables() {
    let (_home, mut cmd) = colorexpansi();
    cmd.arg("idents")
        .assert()
        .success()
        .stdout(contains("  k  black"))
        .stdout(contains("  k  blink"))
        .stdout(contains("\x1b[35msample\x1b[0m"));
}

#[test]
fn config_path_points_under_home() {
    let (home, mut cmd) = colorexpansi();
    let expected = home
        .path()
        .join(".config")
        .join("colorexpansi")
        .join("config.toml");
    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", expected.display())));
}

#[test]
fn config_show_is_annotated() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("[format]"))
        .stdout(contains("# Character separating"))
        .stdout(contains("# template = \"{message}\""));
}

#[test]
fn completions_for_bash() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("colorexpansi"));
}

#[test]
fn verbose_logs_to_stderr_through_template() {
    let (home, mut cmd) = colorexpansi();
    write_config(
        &home,
        "[logging]\ntemplate = \"[{levelname}] {message}\"\n",
    );
    cmd.args(["--verbose", "sequence", "q"])
        .assert()
        .failure()
        .stderr(contains("[DEBUG] Rejected color spec"));
}

#[test]
fn verbose_keeps_configured_trace_level() {
    let (home, mut cmd) = colorexpansi();
    write_config(
        &home,
        "[logging]\ntemplate = \"{levelname} {message}\"\nlevel = \"trace\"\n",
    );
    cmd.args(["--verbose", "render", "{0:$r}", "1"])
        .assert()
        .success()
        .stderr(contains("DEBUG rendering template"))
        .stderr(contains("TRACE Parsed color spec"));
}

#[test]
fn configured_level_applies_without_verbose() {
    let (home, mut cmd) = colorexpansi();
    write_config(
        &home,
        "[logging]\ntemplate = \"{levelname} {message}\"\nlevel = \"trace\"\n",
    );
    cmd.args(["sequence", "r"])
        .assert()
        .success()
        .stderr(contains("TRACE Parsed color spec"));
}

#[test]
fn quiet_by_default() {
    let (_home, mut cmd) = colorexpansi();
    cmd.args(["render", "{0:$r}", "x"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
