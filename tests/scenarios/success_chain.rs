//! Test: Success Chain - every step succeeds, messages appear in order

use crate::helpers::*;
use goci::core::PipelineConfig;
use std::path::PathBuf;

/// Build, test, format-check and publish all succeed
#[tokio::test]
async fn test_reference_pipeline_succeeds() {
    let launcher = ScriptedLauncher::new();

    let run = run_with(PipelineConfig::reference(), &launcher).await;

    assert!(run.result.is_ok(), "unexpected error: {:?}", run.result);
    assert_eq!(run.output, REFERENCE_OUTPUT);
    assert_eq!(run.launched, vec!["go build", "go test", "gofmt -l", "git push"]);
}

/// Every step runs in the project directory
#[tokio::test]
async fn test_steps_bound_to_project_directory() {
    let launcher = ScriptedLauncher::new();

    run_with(PipelineConfig::reference(), &launcher).await;

    let launches = launcher.launches();
    assert_eq!(launches.len(), 4);
    assert!(launches.iter().all(|l| l.working_dir == PathBuf::from(PROJECT)));

    // Only the format check captures stdout
    let captured: Vec<_> = launches.iter().filter(|l| l.captured).map(|l| l.key.as_str()).collect();
    assert_eq!(captured, vec!["gofmt -l"]);
}

/// A YAML-defined pipeline prints its own messages in declared order
#[tokio::test]
async fn test_custom_pipeline_order() {
    let yaml = r#"
name: "rust-ci"
steps:
  - name: "cargo build"
    program: "cargo"
    args: ["build"]
    message: "Cargo Build: SUCCESS"
  - name: "cargo test"
    program: "cargo"
    args: ["test"]
    message: "Cargo Test: SUCCESS"
  - name: "cargo fmt"
    program: "cargo"
    args: ["fmt", "--check"]
    message: "Cargo Fmt: SUCCESS"
    kind: exception
"#;

    let config = PipelineConfig::from_yaml(yaml).unwrap();
    let launcher = ScriptedLauncher::new();

    let run = run_with(config, &launcher).await;

    assert!(run.result.is_ok());
    assert_eq!(
        run.output,
        "Cargo Build: SUCCESS\nCargo Test: SUCCESS\nCargo Fmt: SUCCESS\n"
    );
    assert_eq!(run.launched, vec!["cargo build", "cargo test", "cargo fmt"]);
}
