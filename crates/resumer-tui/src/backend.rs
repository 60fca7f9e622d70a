use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use resumer_core::{AnalysisEvent, Analyzer, Config};

use crate::tui_event::{BackendCommand, BackendEvent};

/// Serve analysis requests from the TUI until the command channel closes or
/// `cancel` fires.
///
/// Requests are handled one at a time, so at most one analysis is ever in
/// flight. Each runs under a child token of `cancel`.
pub async fn run_backend(
    mut commands: mpsc::UnboundedReceiver<BackendCommand>,
    analyzer: Arc<dyn Analyzer>,
    config: Config,
    tx: mpsc::UnboundedSender<BackendEvent>,
    cancel: CancellationToken,
) {
    loop {
        let command = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            command = commands.recv() => match command {
                Some(command) => command,
                None => break,
            },
        };

        match command {
            BackendCommand::Analyze { file } => {
                // Bridge sync progress callback → async channel via unbounded send
                let tx_progress = tx.clone();
                let progress = move |event: AnalysisEvent| {
                    let _ = tx_progress.send(match event {
                        AnalysisEvent::Started { file, .. } => BackendEvent::AnalysisStarted { file },
                        AnalysisEvent::Retrying {
                            attempt,
                            max_retries,
                            delay,
                            reason,
                        } => BackendEvent::Retrying {
                            attempt,
                            max_retries,
                            delay,
                            reason,
                        },
                    });
                };

                let outcome = resumer_core::run_analysis(
                    analyzer.as_ref(),
                    &file,
                    &config,
                    progress,
                    cancel.child_token(),
                )
                .await;

                let event = match outcome {
                    Ok(record) => BackendEvent::AnalysisComplete { record },
                    Err(error) => BackendEvent::AnalysisFailed { error },
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("backend stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumer_core::{AnalysisError, CandidateFile, SelectedFile, StubAnalyzer};
    use std::time::Duration;

    fn resume() -> SelectedFile {
        SelectedFile::try_from(CandidateFile::new("resume.pdf", 500_000, "application/pdf"))
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn analyze_command_yields_started_then_complete() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_backend(
            cmd_rx,
            Arc::new(StubAnalyzer::new(Duration::from_secs(3))),
            Config::default(),
            tx,
            cancel,
        ));

        cmd_tx.send(BackendCommand::Analyze { file: resume() }).unwrap();

        match rx.recv().await {
            Some(BackendEvent::AnalysisStarted { file }) => assert_eq!(file, "resume.pdf"),
            other => panic!("unexpected event: {other:?}"),
        }
        match rx.recv().await {
            Some(BackendEvent::AnalysisComplete { record }) => {
                assert_eq!(record.overall_score.value(), 78)
            }
            other => panic!("unexpected event: {other:?}"),
        }

        drop(cmd_tx);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_reports_cancelled_analysis() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_backend(
            cmd_rx,
            Arc::new(StubAnalyzer::new(Duration::from_secs(60))),
            Config {
                analysis_timeout_secs: 120,
                ..Config::default()
            },
            tx,
            cancel.clone(),
        ));

        cmd_tx.send(BackendCommand::Analyze { file: resume() }).unwrap();
        assert!(matches!(
            rx.recv().await,
            Some(BackendEvent::AnalysisStarted { .. })
        ));
        cancel.cancel();
        assert!(matches!(
            rx.recv().await,
            Some(BackendEvent::AnalysisFailed {
                error: AnalysisError::Cancelled
            })
        ));
        handle.await.unwrap();
    }
}
