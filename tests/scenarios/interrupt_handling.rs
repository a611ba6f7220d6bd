//! Test: Interrupt Handling - termination requests end the run promptly

use crate::helpers::*;
use goci::core::PipelineConfig;
use goci::execution::Signal;
use std::time::{Duration, Instant};

async fn after(delay: Duration, signal: Signal) -> Signal {
    tokio::time::sleep(delay).await;
    signal
}

/// Signal during a hanging step: returns at once with the signal named
#[tokio::test]
async fn test_interrupt_during_step() {
    let launcher = ScriptedLauncher::new().with("go test", Behavior::Hang);
    let start = Instant::now();

    let run = run_until(
        PipelineConfig::reference(),
        &launcher,
        after(Duration::from_millis(100), Signal::Interrupt),
    )
    .await;

    assert!(start.elapsed() < Duration::from_secs(5));
    let err = run.error();
    assert!(err.is_interrupted());
    assert_eq!(err.to_string(), "Received signal: interrupt. Exiting");
    assert_eq!(run.output, "Go Build: SUCCESS\n");
    assert_eq!(run.launched, vec!["go build", "go test"]);
}

/// Terminate is reported as such
#[tokio::test]
async fn test_terminate_during_step() {
    let launcher = ScriptedLauncher::new().with("go build", Behavior::Hang);

    let run = run_until(
        PipelineConfig::reference(),
        &launcher,
        after(Duration::from_millis(50), Signal::Terminate),
    )
    .await;

    assert_eq!(run.error().to_string(), "Received signal: terminated. Exiting");
    assert_eq!(run.output, "");
}

/// The in-flight launch is cancelled once the run is interrupted
#[tokio::test]
async fn test_interrupt_cancels_running_step() {
    let launcher = ScriptedLauncher::new().with("gofmt -l", Behavior::Hang);

    let run = run_until(
        PipelineConfig::reference(),
        &launcher,
        after(Duration::from_millis(50), Signal::Interrupt),
    )
    .await;
    assert!(run.error().is_interrupted());

    // Abort is delivered asynchronously to the worker task
    let deadline = Instant::now() + Duration::from_secs(2);
    while !launcher.was_cancelled() && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(launcher.was_cancelled());
    assert!(!launcher.launched().contains(&"git push".to_string()));
}

/// A signal arriving after completion changes nothing
#[tokio::test]
async fn test_completion_before_signal() {
    let launcher = ScriptedLauncher::new();

    let run = run_until(
        PipelineConfig::reference(),
        &launcher,
        after(Duration::from_secs(60), Signal::Interrupt),
    )
    .await;

    assert!(run.result.is_ok());
    assert_eq!(run.output, REFERENCE_OUTPUT);
}
