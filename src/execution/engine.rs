//! Main execution engine - runs the pipeline and supervises it

use crate::{
    core::{Executable, Pipeline, PipelineConfig, PipelineError, RunState},
    execution::signals::{Signal, TerminationSignals},
    process::Launcher,
};
use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

/// Runs a pipeline definition against a project directory
///
/// Steps execute one at a time on a background task. The caller waits for
/// whichever comes first: a step error, pipeline completion, or a
/// termination signal.
pub struct PipelineRunner<L> {
    config: PipelineConfig,
    launcher: Arc<L>,
}

impl<L: Launcher + 'static> PipelineRunner<L> {
    pub fn new(config: PipelineConfig, launcher: L) -> Self {
        Self {
            config,
            launcher: Arc::new(launcher),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Bind the definition to `project_dir`
    pub fn prepare(&self, project_dir: &Path) -> Result<Pipeline, PipelineError> {
        if project_dir.as_os_str().is_empty() {
            return Err(PipelineError::Config(
                "Project directory is required".to_string(),
            ));
        }

        let pipeline = self.config.to_pipeline(project_dir);
        debug!(state = %RunState::Idle, steps = pipeline.len(), "Pipeline prepared");

        Ok(pipeline)
    }

    /// Run every step against `project_dir`, writing one line per success to `out`
    ///
    /// SIGINT and SIGTERM end the run with [`PipelineError::Interrupted`].
    pub async fn run<W>(&self, project_dir: impl AsRef<Path>, out: W) -> Result<(), PipelineError>
    where
        W: Write + Send + 'static,
    {
        let pipeline = self.prepare(project_dir.as_ref())?;

        let mut signals = TerminationSignals::register().map_err(PipelineError::SignalSetup)?;
        let result = self.run_until(pipeline, out, signals.recv()).await;
        drop(signals);

        result
    }

    /// Run `pipeline`, stopping early if `interrupt` resolves first
    ///
    /// On interrupt the worker is aborted and awaited, so the in-flight launch
    /// has been dropped (killing its child process) by the time this returns.
    pub async fn run_until<W, F>(
        &self,
        pipeline: Pipeline,
        out: W,
        interrupt: F,
    ) -> Result<(), PipelineError>
    where
        W: Write + Send + 'static,
        F: Future<Output = Signal>,
    {
        let span = info_span!("run", pipeline = %pipeline.name, id = %Uuid::new_v4());

        async move {
            let (err_tx, mut err_rx) = oneshot::channel();
            let (done_tx, mut done_rx) = oneshot::channel();

            info!(state = %RunState::Running, steps = pipeline.len(), "Starting pipeline");

            let launcher = self.launcher.clone();
            let mut worker = tokio::spawn(
                run_steps(pipeline, launcher, out, err_tx, done_tx).in_current_span(),
            );

            tokio::pin!(interrupt);

            let result = tokio::select! {
                biased;
                signal = &mut interrupt => Err(PipelineError::Interrupted { signal }),
                Ok(err) = &mut err_rx => Err(err),
                Ok(()) = &mut done_rx => Ok(()),
                joined = &mut worker => Err(PipelineError::WorkerLost(match joined {
                    Ok(()) => "finished without reporting".to_string(),
                    Err(e) => e.to_string(),
                })),
            };

            // The in-flight launch (and its child) must be dropped before returning
            if !matches!(result, Err(PipelineError::WorkerLost(_))) {
                worker.abort();
                let _ = (&mut worker).await;
            }

            let state = RunState::from_result(&result);
            match &result {
                Ok(()) => info!(state = %state, "Pipeline finished"),
                Err(e) => info!(state = %state, error = %e, "Pipeline finished"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Worker: execute steps in order, reporting the first error or completion
async fn run_steps<L, W>(
    pipeline: Pipeline,
    launcher: Arc<L>,
    mut out: W,
    err_tx: oneshot::Sender<PipelineError>,
    done_tx: oneshot::Sender<()>,
) where
    L: Launcher,
    W: Write,
{
    for step in pipeline {
        debug!(step = step.name(), "Step started");

        let message = match step.execute(&*launcher).await {
            Ok(message) => message,
            Err(e) => {
                debug!(step = step.name(), error = %e, "Step failed");
                let _ = err_tx.send(e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", message).and_then(|_| out.flush()) {
            let _ = err_tx.send(PipelineError::Write(e));
            return;
        }

        info!(step = step.name(), "Step succeeded");
    }

    let _ = done_tx.send(());
}
