//! App logic bridging file intake, submission, and render state to the UI.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use eframe::egui;

use crate::config::AppConfig;
use crate::egui_app::state::{NoticeTone, UiState};

pub(crate) mod intake;
pub(crate) mod jobs;
pub(crate) mod submission;

#[cfg(test)]
mod controller_tests;

/// The currently selected image awaiting or having been submitted.
#[derive(Clone, Debug)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub file_name: String,
    /// File content, shared with the submission worker.
    pub bytes: Arc<Vec<u8>>,
}

/// A decoded preview waiting to be uploaded as a texture by the renderer.
#[derive(Clone)]
pub struct PreviewImage {
    /// Sequence number of the decode job that produced this image.
    pub version: u64,
    pub image: egui::ColorImage,
}

/// Maintains app state and bridges core logic to the egui renderer.
pub struct Controller {
    pub ui: UiState,
    pub settings: AppConfig,
    pub(crate) candidate: Option<CandidateFile>,
    pub(crate) jobs: jobs::Jobs,
    pub(crate) preview_image: Option<PreviewImage>,
}

impl Controller {
    pub fn new(settings: AppConfig) -> Self {
        Self {
            ui: UiState::default(),
            settings,
            candidate: None,
            jobs: jobs::Jobs::new(),
            preview_image: None,
        }
    }

    /// Per-frame upkeep: apply finished background jobs and advance notice
    /// auto-dismissal.
    pub fn tick(&mut self) {
        self.poll_jobs();
        self.ui.notices.tick(Instant::now());
    }

    /// Show a transient, self-dismissing notice. Never blocks or fails.
    pub fn notify(&mut self, message: impl Into<String>, tone: NoticeTone) {
        let message = message.into();
        match tone {
            NoticeTone::Info => tracing::info!("{message}"),
            NoticeTone::Warning => tracing::warn!("{message}"),
            NoticeTone::Error => tracing::error!("{message}"),
        }
        self.ui.notices.push(message, tone);
    }

    /// Drop any visible notices immediately.
    pub fn clear_notices(&mut self) {
        self.ui.notices.clear();
    }

    /// Hand the most recent decoded preview to the renderer for texture
    /// upload.
    pub fn take_preview_image(&mut self) -> Option<PreviewImage> {
        self.preview_image.take()
    }

    fn poll_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            };
            match message {
                jobs::JobMessage::PreviewDecoded { request_id, result } => {
                    self.apply_preview_message(request_id, result);
                }
                jobs::JobMessage::Predicted { request_id, result } => {
                    self.apply_predict_message(request_id, result);
                }
            }
        }
    }
}
