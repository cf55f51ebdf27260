// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution: launch, drain both output streams, wait, resolve.

use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin, Command};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::output::decode_stream;
use crate::{Invocation, Outcome, RunError, RunOutput};

#[cfg(test)]
#[path = "runner_tests/mod.rs"]
mod tests;

const READ_CHUNK: usize = 8 * 1024;

/// Runs invocations as child processes.
///
/// Cheap to clone; holds configuration only. Every call owns its own child
/// and pipes, so any number of invocations may run concurrently.
#[derive(Clone, Debug, Default)]
pub struct CommandRunner {
    timeout: Option<Duration>,
    stderr_on_success: bool,
}

/// How the wait for a running child ended.
enum Finished<S> {
    Exited(io::Result<Collected>),
    TimedOut(Duration),
    Stopped(S),
}

struct Collected {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill the child and fail with [`RunError::Timeout`] once this elapses.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Keep stderr in [`RunOutput::stderr`] for successful runs.
    ///
    /// Off by default: a zero exit reports stdout only, and whatever the
    /// child wrote to stderr is dropped.
    pub fn stderr_on_success(mut self, enabled: bool) -> Self {
        self.stderr_on_success = enabled;
        self
    }

    /// Run to completion and return the outcome.
    pub async fn run(&self, invocation: &Invocation) -> Outcome {
        match self.execute(invocation, std::future::pending::<Infallible>()).await {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like [`run`](Self::run), but kills the child and returns `None` if
    /// `cancel` fires first.
    pub async fn run_until_cancelled(
        &self,
        invocation: &Invocation,
        cancel: &CancellationToken,
    ) -> Option<Outcome> {
        self.execute(invocation, cancel.cancelled()).await.ok()
    }

    /// Run on a new task and hand the outcome to `on_complete`.
    pub fn spawn<F>(&self, invocation: Invocation, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let runner = self.clone();
        tokio::spawn(async move {
            let outcome = runner.run(&invocation).await;
            on_complete(outcome);
        })
    }

    /// Run on a new task; `on_complete` is never called if `cancel` fires
    /// before the child exits.
    pub fn spawn_cancellable<F>(
        &self,
        invocation: Invocation,
        cancel: CancellationToken,
        on_complete: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let runner = self.clone();
        tokio::spawn(async move {
            match runner.run_until_cancelled(&invocation, &cancel).await {
                Some(outcome) => on_complete(outcome),
                None => tracing::debug!(%invocation, "invocation cancelled, outcome dropped"),
            }
        })
    }

    async fn execute<S>(
        &self,
        invocation: &Invocation,
        stop: impl Future<Output = S>,
    ) -> Result<Outcome, S> {
        let span = tracing::info_span!(
            "runner.cmd",
            cmd = %invocation.command(),
            args = ?invocation.args(),
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        async move {
            tokio::pin!(stop);

            // An already-fired stop wins before anything is spawned.
            let launched = tokio::select! {
                biased;
                stopped = &mut stop => {
                    tracing::info!("cancelled before launch");
                    return Err(stopped);
                }
                launched = launch(invocation) => launched,
            };

            let start = Instant::now();
            let mut child = match launched {
                Ok(child) => child,
                Err(e) => {
                    tracing::warn!(error = %e, "launch failed");
                    return Ok(Err(e));
                }
            };

            let finished = {
                let work = collect(&mut child, invocation.input());
                tokio::pin!(work);
                tokio::select! {
                    collected = &mut work => Finished::Exited(collected),
                    timeout = deadline(self.timeout) => Finished::TimedOut(timeout),
                    stopped = &mut stop => Finished::Stopped(stopped),
                }
            };

            let command = invocation.command().to_string();
            match finished {
                Finished::Exited(Ok(collected)) => Ok(self.resolve(command, collected, start)),
                Finished::Exited(Err(source)) => {
                    terminate(&mut child).await;
                    Ok(Err(RunError::Io { command, source }))
                }
                Finished::TimedOut(timeout) => {
                    tracing::warn!(timeout_ms = timeout.as_millis() as u64, "timed out, killing child");
                    terminate(&mut child).await;
                    Ok(Err(RunError::Timeout { command, timeout }))
                }
                Finished::Stopped(stopped) => {
                    tracing::info!("cancelled, killing child");
                    terminate(&mut child).await;
                    Err(stopped)
                }
            }
        }
        .instrument(span)
        .await
    }

    fn resolve(&self, command: String, collected: Collected, start: Instant) -> Outcome {
        let duration = start.elapsed();
        let exit_code = collected.status.code();

        let span = tracing::Span::current();
        span.record("exit_code", exit_code.unwrap_or(-1));
        span.record("duration_ms", duration.as_millis() as u64);
        tracing::debug!(?exit_code, "child process exited");

        let stdout = decode_stream(collected.stdout, "stdout");
        let stderr = decode_stream(collected.stderr, "stderr");

        if collected.status.success() {
            let stderr = (self.stderr_on_success && !stderr.is_empty()).then_some(stderr);
            Ok(RunOutput { stdout, stderr, exit_code: 0, duration })
        } else {
            Err(RunError::NonZeroExit { command, exit_code, stderr })
        }
    }
}

/// Validate the invocation and spawn the child with all three pipes set up.
async fn launch(invocation: &Invocation) -> Result<Child, RunError> {
    let command = invocation.command();
    if command.is_empty() {
        return Err(RunError::Launch {
            command: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty command name"),
        });
    }

    // Reading the directory covers missing, non-directory and unreadable.
    let cwd = invocation.cwd();
    tokio::fs::read_dir(cwd)
        .await
        .map_err(|source| RunError::WorkingDir { path: cwd.to_path_buf(), source })?;

    let mut process = Command::new(command);
    process.args(invocation.args());
    process.current_dir(cwd);
    process.stdin(if invocation.input().is_some() { Stdio::piped() } else { Stdio::null() });
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());
    process.kill_on_drop(true);

    process.spawn().map_err(|source| RunError::Launch { command: command.to_string(), source })
}

/// Feed stdin, drain stdout and stderr, and wait for exit, all concurrently.
async fn collect(child: &mut Child, input: Option<&str>) -> io::Result<Collected> {
    let stdin = child.stdin.take();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (fed, stdout, stderr, status) = tokio::join!(
        feed(stdin, input),
        drain(stdout, "stdout"),
        drain(stderr, "stderr"),
        child.wait(),
    );
    fed?;

    Ok(Collected { status: status?, stdout: stdout?, stderr: stderr? })
}

async fn feed(stdin: Option<ChildStdin>, input: Option<&str>) -> io::Result<()> {
    let (Some(mut stdin), Some(input)) = (stdin, input) else {
        return Ok(());
    };
    let written = stdin.write_all(input.as_bytes()).await;
    drop(stdin); // close pipe to signal EOF
    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            // The child exited or closed stdin early; its exit code decides.
            tracing::debug!("child closed stdin before reading all input");
            Ok(())
        }
        other => other,
    }
}

async fn drain<R>(stream: Option<R>, name: &'static str) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let Some(mut stream) = stream else {
        return Ok(Vec::new());
    };
    let mut accumulated = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(accumulated);
        }
        tracing::trace!(stream = name, bytes = n, "read chunk");
        accumulated.extend_from_slice(&chunk[..n]);
    }
}

/// Resolves after `timeout`, or never when there is none.
async fn deadline(timeout: Option<Duration>) -> Duration {
    match timeout {
        Some(timeout) => {
            tokio::time::sleep(timeout).await;
            timeout
        }
        None => std::future::pending().await,
    }
}

/// Kill and reap. Errors only mean the child is already gone.
async fn terminate(child: &mut Child) {
    if let Err(e) = child.kill().await {
        tracing::debug!(error = %e, "kill after early exit");
    }
}
