//! Integration tests for grouped output rendered by a text console.

use logging::{ConsoleConfig, DirOptions, Logger, WriterConsole};
use serde_json::json;
use test_support::SharedBuffer;

fn text_logger(config: ConsoleConfig) -> (Logger, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let console = WriterConsole::with_config(out.clone(), err.clone(), config);
    (Logger::new(console), out, err)
}

/// Verifies nested groups indent their lines and keep blocks together.
#[test]
fn nested_groups_render_indented() {
    let (root, out, err) = text_logger(ConsoleConfig::default());
    let job = root.group("job");
    job.info("start");
    root.log("unrelated");
    job.grouped("step", |step| {
        step.log("inside");
        step.warn("careful");
    });
    job.group_end();

    assert_eq!(out.contents(), "unrelated\njob\n  start\n  step\n    inside\n");
    assert_eq!(err.contents(), "    careful\n");
}

/// Verifies scoped messages render with their prefixes.
#[test]
fn scope_prefixes_render() {
    let (root, out, _) = text_logger(ConsoleConfig::default());
    root.scoped("svc").log("up");
    root.grouped("db", |db| {
        db.log("connected");
    });

    assert_eq!(out.lines(), vec!["svc | up", "svc | db", "  svc | connected"]);
}

/// Verifies indent width comes from the configuration.
#[test]
fn indent_width_is_configurable() {
    let (root, out, _) = text_logger(ConsoleConfig::default().with_indent_width(4));
    root.grouped("g", |group| {
        group.log("x");
    });

    assert_eq!(out.contents(), "g\n    x\n");
}

/// Verifies counters and dumps render inside groups.
#[test]
fn counters_and_dumps_render() {
    let (root, out, _) = text_logger(ConsoleConfig::default());
    root.grouped("stats", |stats| {
        stats
            .count("hit")
            .count("hit")
            .dir_with(&json!({"a": {"b": {"c": 1}}}), DirOptions::default().with_depth(Some(1)))
            .dirxml("<p/>");
    });

    assert_eq!(
        out.lines(),
        vec![
            "stats",
            "  hit: 1",
            "  hit: 2",
            r#"  {"a":{"b":"[Object]"}}"#,
            "  <p/>",
        ]
    );
}

/// Verifies failed assertions go to the error stream and passing ones are silent.
#[test]
fn assertions_render_on_failure_only() {
    let (root, out, err) = text_logger(ConsoleConfig::default());
    root.assert(true, "ok").assert(false, "bad state");

    assert!(out.contents().is_empty());
    assert_eq!(err.contents(), "Assertion failed: bad state\n");
}
