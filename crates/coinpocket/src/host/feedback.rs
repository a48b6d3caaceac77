//! Best-effort feedback channel
//!
//! Feedback signals are queued on a bounded channel and delivered by a worker
//! thread, so emitting never blocks the caller. When the queue is full or the
//! worker is gone the signal is dropped.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::debug;

use crate::config::feedback::CHANNEL_CAPACITY;
use crate::error::Result;

use super::traits::HapticFeedback;
use super::types::Feedback;

/// `HapticFeedback` that forwards signals over a bounded channel
pub struct FeedbackChannel {
    tx: Sender<Feedback>,
}

impl FeedbackChannel {
    /// Create a channel with the default capacity
    pub fn new() -> (Self, Receiver<Feedback>) {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    /// Create a channel holding at most `capacity` pending signals
    pub fn with_capacity(capacity: usize) -> (Self, Receiver<Feedback>) {
        let (tx, rx) = bounded(capacity);
        (Self { tx }, rx)
    }
}

impl HapticFeedback for FeedbackChannel {
    fn emit(&self, feedback: Feedback) {
        match self.tx.try_send(feedback) {
            Ok(()) => {}
            Err(TrySendError::Full(f)) => debug!("Feedback queue full, dropping {f:?}"),
            Err(TrySendError::Disconnected(f)) => debug!("Feedback worker gone, dropping {f:?}"),
        }
    }
}

/// Drain `rx` into `sink` on a dedicated thread
///
/// The thread exits once every `FeedbackChannel` for `rx` is dropped.
pub fn spawn_feedback_worker(
    rx: Receiver<Feedback>,
    sink: Arc<dyn HapticFeedback>,
) -> Result<JoinHandle<()>> {
    let handle = std::thread::Builder::new()
        .name("feedback".into())
        .spawn(move || {
            for feedback in rx.iter() {
                sink.emit(feedback);
            }
        })?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::types::{ImpactStyle, NotificationType};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Feedback>>);

    impl HapticFeedback for Recorder {
        fn emit(&self, feedback: Feedback) {
            self.0.lock().unwrap().push(feedback);
        }
    }

    #[test]
    fn test_emit_queues_signal() {
        let (channel, rx) = FeedbackChannel::new();
        channel.emit(Feedback::Impact(ImpactStyle::Heavy));
        assert_eq!(rx.try_recv().unwrap(), Feedback::Impact(ImpactStyle::Heavy));
    }

    #[test]
    fn test_full_queue_drops_signal() {
        let (channel, rx) = FeedbackChannel::with_capacity(1);
        channel.emit(Feedback::SelectionChanged);
        channel.emit(Feedback::Notification(NotificationType::Error));

        assert_eq!(rx.len(), 1);
        assert_eq!(rx.try_recv().unwrap(), Feedback::SelectionChanged);
    }

    #[test]
    fn test_disconnected_does_not_panic() {
        let (channel, rx) = FeedbackChannel::new();
        drop(rx);
        channel.emit(Feedback::SelectionChanged);
    }

    #[test]
    fn test_worker_delivers_in_order() {
        let recorder = Arc::new(Recorder::default());
        let (channel, rx) = FeedbackChannel::new();
        let handle = spawn_feedback_worker(rx, recorder.clone()).unwrap();

        channel.emit(Feedback::Impact(ImpactStyle::Light));
        channel.emit(Feedback::Notification(NotificationType::Success));
        drop(channel);
        handle.join().unwrap();

        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec![
                Feedback::Impact(ImpactStyle::Light),
                Feedback::Notification(NotificationType::Success),
            ]
        );
    }
}
