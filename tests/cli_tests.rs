use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const GAME: &str = "[Size \"6\"]\n[Komi \"2\"]\n\
1. a1 {evaluation: +0.3} f1 {evaluation: -1.5}\n\
2. c3 {evaluation: +0.0} d4 {evaluation: -0.2}\n\
3. e5 {evaluation: +0.6}\n";

struct TestContext {
    dir: TempDir,
    game_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let game_path = dir.path().join("analysis.ptn");
        fs::write(&game_path, GAME).unwrap();
        Self { dir, game_path }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_evalgraph"))
            .current_dir(self.dir.path())
            .args(args)
            .output()
            .expect("Failed to execute binary")
    }
}

#[test]
fn test_cli_writes_graph_and_summary() {
    let ctx = TestContext::new();
    let out = ctx.path("swings.png");
    let summary = ctx.path("swings.json");

    let output = ctx.run(&[
        ctx.game_path.to_str().unwrap(),
        "--no-labels",
        "--output",
        out.to_str().unwrap(),
        "--summary",
        summary.to_str().unwrap(),
    ]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stdout:\n{}", stdout);
    assert!(stdout.contains("EVALUATION SUMMARY"));

    assert!(out.exists());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(json["plies"], 5);
    assert_eq!(json["moves"], 3);
    assert_eq!(json["lead_changes"], 4);
    assert_eq!(json["leader"], "white");
}

#[test]
fn test_cli_default_paths() {
    let ctx = TestContext::new();

    let output = ctx.run(&["--no-labels"]);

    assert!(output.status.success());
    assert!(ctx.path("graph.png").exists());
}

#[test]
fn test_cli_missing_input_fails() {
    let ctx = TestContext::new();

    let output = ctx.run(&["no_such_game.ptn", "--no-labels"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(!ctx.path("graph.png").exists());
}

#[test]
fn test_cli_game_without_annotations_still_renders() {
    let ctx = TestContext::new();
    let plain = ctx.path("plain.ptn");
    fs::write(&plain, "1. a1 f1\n2. c3 d4\n").unwrap();

    let output = ctx.run(&[plain.to_str().unwrap(), "--no-labels"]);

    assert!(output.status.success());
    assert!(ctx.path("graph.png").exists());
}

#[test]
fn test_cli_bad_font_fails() {
    let ctx = TestContext::new();
    let font = ctx.path("fake.ttf");
    fs::write(&font, "nope").unwrap();

    let output = ctx.run(&["--font", font.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_with_labels_uses_system_font_or_falls_back() {
    let ctx = TestContext::new();

    // Text is drawn when a system font exists; otherwise the run warns and
    // still writes the graph.
    let output = ctx.run(&[]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr:\n{}", stderr);
    let bytes = fs::read(ctx.path("graph.png")).unwrap();
    assert_eq!(bytes[..4], [0x89, b'P', b'N', b'G']);
}
