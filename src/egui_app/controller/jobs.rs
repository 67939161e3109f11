//! Background job plumbing: worker threads report back over a channel that
//! the controller drains once per frame.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use crate::egui_app::controller::intake::{DecodedPreview, IntakeError};
use crate::predict::{PredictError, Prediction};

pub(crate) enum JobMessage {
    PreviewDecoded {
        request_id: u64,
        result: Result<DecodedPreview, IntakeError>,
    },
    Predicted {
        request_id: u64,
        result: Result<Prediction, PredictError>,
    },
}

/// Channel endpoints plus the sequence counters used to discard stale
/// completions. A result is applied only when its id is the latest issued for
/// its job kind, so a newer selection or submission always wins.
pub(crate) struct Jobs {
    tx: Sender<JobMessage>,
    rx: Receiver<JobMessage>,
    latest_preview_id: u64,
    latest_predict_id: u64,
}

impl Jobs {
    pub(crate) fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            latest_preview_id: 0,
            latest_predict_id: 0,
        }
    }

    pub(crate) fn sender(&self) -> Sender<JobMessage> {
        self.tx.clone()
    }

    pub(crate) fn try_recv(&self) -> Result<JobMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub(crate) fn next_preview_id(&mut self) -> u64 {
        self.latest_preview_id += 1;
        self.latest_preview_id
    }

    pub(crate) fn is_latest_preview(&self, request_id: u64) -> bool {
        request_id == self.latest_preview_id
    }

    pub(crate) fn next_predict_id(&mut self) -> u64 {
        self.latest_predict_id += 1;
        self.latest_predict_id
    }

    pub(crate) fn is_latest_predict(&self, request_id: u64) -> bool {
        request_id == self.latest_predict_id
    }

    /// How many preview decodes have been issued so far.
    #[cfg(test)]
    pub(crate) fn issued_preview_count(&self) -> u64 {
        self.latest_preview_id
    }

    /// How many submissions have been issued so far.
    #[cfg(test)]
    pub(crate) fn issued_predict_count(&self) -> u64 {
        self.latest_predict_id
    }
}
