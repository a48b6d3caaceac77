//! Bounded confirmation prompt
//!
//! `ChannelPopup` hands popup requests to whichever thread renders them and
//! waits a bounded time for the answer. The frontend thread receives
//! `PopupRequest`s and replies through the request itself. Each request
//! carries the deadline after which the asker stops waiting, so the frontend
//! can close the prompt at the same moment.

use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender};
use log::{debug, warn};

use crate::config::popup::CONFIRM_TIMEOUT_SECS;
use crate::error::{CoreError, Result};

use super::traits::Popup;
use super::types::{PopupOutcome, PopupParams};

/// A popup waiting to be rendered and answered
pub struct PopupRequest {
    pub params: PopupParams,
    deadline: Instant,
    reply_tx: Sender<PopupOutcome>,
}

impl PopupRequest {
    /// When the asker gives up and treats the popup as dismissed
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Answer the popup; ignored if the asker already gave up
    pub fn reply(self, outcome: PopupOutcome) {
        let _ = self.reply_tx.send(outcome);
    }
}

/// `Popup` that forwards requests over a channel and waits with a timeout
pub struct ChannelPopup {
    request_tx: Sender<PopupRequest>,
    timeout: Duration,
}

impl ChannelPopup {
    /// Create a popup with the default confirmation timeout
    pub fn new() -> (Self, Receiver<PopupRequest>) {
        Self::with_timeout(Duration::from_secs(CONFIRM_TIMEOUT_SECS))
    }

    /// Create a popup whose requests count as dismissed after `timeout`
    pub fn with_timeout(timeout: Duration) -> (Self, Receiver<PopupRequest>) {
        let (request_tx, request_rx) = unbounded();
        (Self { request_tx, timeout }, request_rx)
    }
}

impl Popup for ChannelPopup {
    fn show(&self, params: PopupParams) -> Result<PopupOutcome> {
        let (reply_tx, reply_rx) = bounded(1);
        let title = params.title.clone();
        let now = Instant::now();
        // Absurdly long timeouts are capped at one year
        let deadline = now
            .checked_add(self.timeout)
            .unwrap_or_else(|| now + Duration::from_secs(365 * 24 * 60 * 60));
        self.request_tx
            .send(PopupRequest {
                params,
                deadline,
                reply_tx,
            })
            .map_err(|_| CoreError::Config("Popup frontend is not running".to_string()))?;

        match reply_rx.recv_deadline(deadline) {
            Ok(outcome) => Ok(outcome),
            Err(RecvTimeoutError::Timeout) => {
                warn!("Popup {title:?} unanswered after {:?}, treating as dismissed", self.timeout);
                Ok(PopupOutcome::Dismissed)
            }
            Err(RecvTimeoutError::Disconnected) => {
                debug!("Popup {title:?} dropped without an answer");
                Ok(PopupOutcome::Dismissed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::types::{ButtonType, PopupButton};
    use std::thread;

    fn params() -> PopupParams {
        PopupParams::new("Add to Favorites", "Add Bitcoin to your watchlist?")
            .button(PopupButton::new("add", ButtonType::Default).with_text("Add"))
            .button(PopupButton::new("cancel", ButtonType::Cancel))
    }

    #[test]
    fn test_reply_is_returned() {
        let (popup, requests) = ChannelPopup::new();
        let frontend = thread::spawn(move || {
            let request = requests.recv().unwrap();
            assert_eq!(request.params.title, "Add to Favorites");
            request.reply(PopupOutcome::Pressed("add".into()));
        });

        let outcome = popup.show(params()).unwrap();
        assert_eq!(outcome, PopupOutcome::Pressed("add".into()));
        frontend.join().unwrap();
    }

    #[test]
    fn test_timeout_counts_as_dismissed() {
        let (popup, _requests) = ChannelPopup::with_timeout(Duration::from_millis(20));
        assert_eq!(popup.show(params()).unwrap(), PopupOutcome::Dismissed);
    }

    #[test]
    fn test_request_carries_asker_deadline() {
        let timeout = Duration::from_millis(30);
        let (popup, requests) = ChannelPopup::with_timeout(timeout);
        let before = Instant::now();
        let asker = thread::spawn(move || popup.show(params()).unwrap());

        let request = requests.recv().unwrap();
        assert!(request.deadline() >= before + timeout);
        assert!(request.deadline() <= Instant::now() + timeout);

        assert_eq!(asker.join().unwrap(), PopupOutcome::Dismissed);
        assert!(request.is_expired());
        // Late answers go nowhere
        request.reply(PopupOutcome::Pressed("add".into()));
    }

    #[test]
    fn test_dropped_request_counts_as_dismissed() {
        let (popup, requests) = ChannelPopup::new();
        let frontend = thread::spawn(move || {
            drop(requests.recv().unwrap());
        });

        assert_eq!(popup.show(params()).unwrap(), PopupOutcome::Dismissed);
        frontend.join().unwrap();
    }

    #[test]
    fn test_missing_frontend_is_an_error() {
        let (popup, requests) = ChannelPopup::new();
        drop(requests);
        assert!(popup.show(params()).is_err());
    }
}
