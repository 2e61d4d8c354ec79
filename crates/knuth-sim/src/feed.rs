//! Stepwise value feed.
//!
//! A [`Feed`] reveals its input one value per tick: after each `delay` it
//! yields the next prefix `values[..k]`, ending once the whole sequence has
//! been shown. The producer is a tokio task writing into a one-slot channel;
//! cancelling trips a [`CancellationToken`] that both ends watch, so no prefix
//! is observed after [`Feed::cancel`] returns.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_core::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::Value;

/// Handle on one playback. Dropping it cancels the playback.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct Feed {
    token: CancellationToken,
    rx: mpsc::Receiver<Vec<Value>>,
    task: JoinHandle<()>,
}

impl Feed {
    pub fn start(values: Vec<Value>, delay: Duration) -> Self {
        let token = CancellationToken::new();
        let (tx, rx) = mpsc::channel(1);
        debug!(len = values.len(), ?delay, "feed started");
        let task = tokio::spawn(produce(values, delay, tx, token.clone()));
        Self { token, rx, task }
    }

    /// Discards the current playback and starts over from the empty prefix.
    pub fn restart(&mut self, values: Vec<Value>, delay: Duration) {
        *self = Self::start(values, delay);
    }

    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!("feed cancelled");
        }
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the producing task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the next prefix; `None` once the feed is exhausted or
    /// cancelled.
    pub async fn next(&mut self) -> Option<Vec<Value>> {
        if self.token.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            prefix = self.rx.recv() => prefix,
        }
    }
}

impl Stream for Feed {
    type Item = Vec<Value>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Vec<Value>>> {
        let this = self.get_mut();
        if this.token.is_cancelled() {
            return Poll::Ready(None);
        }
        this.rx.poll_recv(cx)
    }
}

impl Drop for Feed {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn produce(
    values: Vec<Value>,
    delay: Duration,
    tx: mpsc::Sender<Vec<Value>>,
    token: CancellationToken,
) {
    for k in 1..=values.len() {
        tokio::select! {
            biased;
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }
        tokio::select! {
            biased;
            _ = token.cancelled() => return,
            sent = tx.send(values[..k].to_vec()) => {
                if sent.is_err() {
                    return;
                }
            }
        }
    }
    debug!(len = values.len(), "feed finished");
}
