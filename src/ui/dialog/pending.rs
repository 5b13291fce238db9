// SPDX-License-Identifier: MPL-2.0
//! The caller's side of a confirmation: a future resolving to the outcome.

use super::confirm::DialogId;
use iced::futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Resolves to `true` when the user confirms and `false` on every other
/// path, including the presenter dropping the dialog unanswered.
#[derive(Debug)]
#[must_use = "the outcome is only observable through the pending confirm"]
pub struct PendingConfirm {
    id: DialogId,
    receiver: oneshot::Receiver<bool>,
    settled: Option<bool>,
}

impl PendingConfirm {
    pub(crate) fn new(id: DialogId, receiver: oneshot::Receiver<bool>) -> Self {
        Self {
            id,
            receiver,
            settled: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> DialogId {
        self.id
    }

    /// Non-blocking check. `None` while the dialog is still open.
    pub fn try_outcome(&mut self) -> Option<bool> {
        if self.settled.is_none() {
            self.settled = match self.receiver.try_recv() {
                Ok(Some(outcome)) => Some(outcome),
                Ok(None) => None,
                Err(oneshot::Canceled) => Some(false),
            };
        }
        self.settled
    }
}

impl Future for PendingConfirm {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        if let Some(outcome) = self.settled {
            return Poll::Ready(outcome);
        }
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(result) => {
                let outcome = result.unwrap_or(false);
                self.settled = Some(outcome);
                Poll::Ready(outcome)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
