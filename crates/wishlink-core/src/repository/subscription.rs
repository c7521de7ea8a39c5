//! Push subscriptions
//!
//! A [`Subscription`] is a stream of full replacement snapshots. The backend
//! listener stays registered until the subscription is dropped, at which
//! point its release hook runs exactly once.

use futures::channel::mpsc;
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::domain::StoreResult;

/// Producer half handed to the backend callback
pub struct SnapshotSender<T> {
    inner: mpsc::UnboundedSender<StoreResult<T>>,
}

impl<T> Clone for SnapshotSender<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> SnapshotSender<T> {
    /// Deliver a snapshot. Returns false once the subscription is gone.
    pub fn send(&self, snapshot: StoreResult<T>) -> bool {
        self.inner.unbounded_send(snapshot).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

pub struct Subscription<T> {
    receiver: mpsc::UnboundedReceiver<StoreResult<T>>,
    release: Option<Box<dyn FnOnce()>>,
}

impl<T> Subscription<T> {
    /// Create a connected sender/subscription pair with no release hook
    pub fn channel() -> (SnapshotSender<T>, Self) {
        let (inner, receiver) = mpsc::unbounded();
        (
            SnapshotSender { inner },
            Self {
                receiver,
                release: None,
            },
        )
    }

    /// Run `release` when the subscription is dropped
    pub fn on_release(mut self, release: impl FnOnce() + 'static) -> Self {
        self.release = Some(Box::new(release));
        self
    }
}

impl<T> Stream for Subscription<T> {
    type Item = StoreResult<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_next_unpin(cx)
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.receiver.close();
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_snapshots_arrive_in_order() {
        let (sender, mut subscription) = Subscription::<u32>::channel();
        assert!(sender.send(Ok(1)));
        assert!(sender.send(Ok(2)));
        assert_eq!(subscription.next().now_or_never(), Some(Some(Ok(1))));
        assert_eq!(subscription.next().now_or_never(), Some(Some(Ok(2))));
        assert_eq!(subscription.next().now_or_never(), None);
    }

    #[test]
    fn test_drop_runs_release_once_and_closes_sender() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let (sender, subscription) = Subscription::<u32>::channel();
        let subscription = subscription.on_release(move || counter.set(counter.get() + 1));

        drop(subscription);

        assert_eq!(released.get(), 1);
        assert!(sender.is_closed());
        assert!(!sender.send(Ok(3)));
    }
}
