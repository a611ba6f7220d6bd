//! Test: Failure Handling - the first failing step ends the run

use crate::helpers::*;
use goci::core::{PipelineConfig, PipelineError};

/// Failure at step k: error names step k, output holds the first k-1 messages
#[tokio::test]
async fn test_failure_at_each_step() {
    let steps = [
        ("go build", "go build", 0),
        ("go test", "go test", 1),
        ("gofmt -l", "go fmt", 2),
        ("git push", "git push", 3),
    ];

    for (key, name, succeeded) in steps {
        let launcher = ScriptedLauncher::new().with(key, Behavior::Fail(1));

        let run = run_with(PipelineConfig::reference(), &launcher).await;

        let err = run.error();
        assert_eq!(err.step(), Some(name));
        assert_eq!(err.to_string(), format!("'{}' failed: exit status 1", name));

        let expected: String = REFERENCE_OUTPUT
            .lines()
            .take(succeeded)
            .map(|l| format!("{}\n", l))
            .collect();
        assert_eq!(run.output, expected);
        assert_eq!(run.launched.len(), succeeded + 1);
    }
}

/// Formatter exits 0 but lists a file: the run fails and publish never starts
#[tokio::test]
async fn test_format_check_output_fails_run() {
    let launcher = ScriptedLauncher::new().with("gofmt -l", Behavior::Print("main.go\n"));

    let run = run_with(PipelineConfig::reference(), &launcher).await;

    let err = run.error();
    assert!(matches!(err, PipelineError::UnexpectedOutput { .. }));
    assert!(err.to_string().contains("go fmt"));
    assert!(err.to_string().contains("main.go"));
    assert_eq!(run.output, "Go Build: SUCCESS\nGo Test: SUCCESS\n");
    assert!(!run.launched.contains(&"git push".to_string()));
}

/// Output from a non-capturing step does not matter
#[tokio::test]
async fn test_output_ignored_for_standard_steps() {
    let launcher = ScriptedLauncher::new().with("go test", Behavior::Print("=== RUN TestX\n"));

    let run = run_with(PipelineConfig::reference(), &launcher).await;

    assert!(run.result.is_ok());
    assert_eq!(run.output, REFERENCE_OUTPUT);
}

/// A missing executable is a command failure naming the step
#[tokio::test]
async fn test_launch_failure() {
    let launcher = ScriptedLauncher::new().with("go build", Behavior::NotFound);

    let run = run_with(PipelineConfig::reference(), &launcher).await;

    let err = run.error();
    assert!(matches!(err, PipelineError::CommandFailed { .. }));
    assert!(err.to_string().starts_with("'go build' failed:"));
    assert!(err.to_string().contains("executable not found"));
    assert_eq!(run.output, "");
    assert_eq!(run.launched, vec!["go build"]);
}

/// No project directory: configuration error before any launch
#[tokio::test]
async fn test_missing_project_directory() {
    let launcher = ScriptedLauncher::new();
    let runner = goci::PipelineRunner::new(PipelineConfig::reference(), launcher.clone());

    let err = runner.run("", std::io::sink()).await.unwrap_err();

    assert!(matches!(err, PipelineError::Config(_)));
    assert!(launcher.launched().is_empty());
}
