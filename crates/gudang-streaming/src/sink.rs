//! Platform-controlled streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use gudang_core::{LifecyclePhase, LivenessToken, TimingContext, WorkloadError};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// A write failed; the client is gone.
    Failed,
    /// Response has been completed.
    Completed,
}

/// Platform-controlled streaming sink that enforces shell-first ordering.
///
/// Generic over the underlying sink so it works with Spin's `OutgoingBody`
/// as well as in-memory sinks in tests. A failed write cancels the request's
/// [`LivenessToken`] so pending fetches stop rendering.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    liveness: LivenessToken,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            liveness: LivenessToken::new(),
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Share the request's liveness token.
    pub fn with_liveness(mut self, token: LivenessToken) -> Self {
        self.liveness = token;
        self
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink closed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    ///
    /// Sections can be sent in any order after the shell.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        self.ensure_open()?;
        self.write(bytes).await
    }

    /// Flush and mark the response complete.
    pub async fn complete(&mut self) -> Result<(), WorkloadError> {
        self.ensure_open()?;
        if let Err(e) = self.inner.flush().await {
            return Err(self.fail(e.to_string()));
        }
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::ShellSent => Ok(()),
            SinkState::Failed => Err(WorkloadError::StreamError(
                "Client disconnected".to_string(),
            )),
            SinkState::Completed => Err(WorkloadError::StreamError(
                "Sink already completed".to_string(),
            )),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        let len = bytes.len();
        match self.inner.send(bytes).await {
            Ok(()) => {
                self.bytes_sent += len;
                Ok(())
            }
            Err(e) => Err(self.fail(e.to_string())),
        }
    }

    fn fail(&mut self, message: String) -> WorkloadError {
        self.state = SinkState::Failed;
        self.liveness.cancel();
        WorkloadError::StreamError(message)
    }

    /// Get the list of sections sent.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total bytes written so far.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Whether the client is still reading.
    pub fn is_live(&self) -> bool {
        self.liveness.is_live()
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(name) => LifecyclePhase::SectionSent(name.clone()),
                None => LifecyclePhase::ShellSent,
            },
            SinkState::Failed => LifecyclePhase::Error("client disconnected".to_string()),
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}
