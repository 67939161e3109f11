//! Submission lifecycle: preconditions, loading state, and last-wins
//! resolution of classification responses.

use std::time::Instant;

use crate::egui_app::state::{LoadingState, NoticeTone, Phase, ResultState};
use crate::predict::{self, PredictError, Prediction};

use super::intake::{self, BAD_TYPE_MESSAGE};
use super::jobs::JobMessage;
use super::{CandidateFile, Controller};

/// Shown when classify is pressed with no candidate selected.
pub const NO_FILE_MESSAGE: &str = "Please select an image first.";

/// Everything a worker needs to issue one classification request.
pub(crate) struct SubmissionJob {
    pub request_id: u64,
    pub endpoint: String,
    pub candidate: CandidateFile,
}

impl Controller {
    /// Submit the current candidate for classification.
    pub fn submit(&mut self) {
        if let Some(job) = self.begin_submission() {
            self.spawn_predict(job);
        }
    }

    /// Check preconditions and enter the loading state, returning the job to
    /// run. `None` means a notice was posted and no request may be made.
    pub(crate) fn begin_submission(&mut self) -> Option<SubmissionJob> {
        let Some(candidate) = self.candidate.clone() else {
            self.notify(NO_FILE_MESSAGE, NoticeTone::Warning);
            return None;
        };
        if !intake::is_image_file(&candidate.path) {
            self.notify(BAD_TYPE_MESSAGE, NoticeTone::Error);
            return None;
        }

        self.clear_notices();
        self.ui.result = None;
        self.ui.loading = Some(LoadingState {
            started_at: Instant::now(),
        });
        self.ui.transition(Phase::Loading);

        let request_id = self.jobs.next_predict_id();
        tracing::info!(
            "Submitting {} for classification (request {request_id})",
            candidate.file_name
        );
        Some(SubmissionJob {
            request_id,
            endpoint: self.settings.endpoint.clone(),
            candidate,
        })
    }

    fn spawn_predict(&mut self, job: SubmissionJob) {
        let tx = self.jobs.sender();
        std::thread::spawn(move || {
            let result = predict::classify(
                &job.endpoint,
                &job.candidate.file_name,
                &job.candidate.bytes,
            );
            let _ = tx.send(JobMessage::Predicted {
                request_id: job.request_id,
                result,
            });
        });
    }

    /// Resolve a finished submission. Only the latest issued request may
    /// touch state; loading clears on every non-stale path.
    pub(crate) fn apply_predict_message(
        &mut self,
        request_id: u64,
        result: Result<Prediction, PredictError>,
    ) {
        if !self.jobs.is_latest_predict(request_id) {
            tracing::debug!("Dropping stale classification response {request_id}");
            return;
        }
        self.ui.loading = None;
        match result {
            Ok(prediction) => {
                tracing::info!(
                    "Classified as {} ({:.2}%, dog: {})",
                    prediction.breed,
                    prediction.confidence,
                    prediction.is_dog
                );
                self.clear_notices();
                self.ui.result = Some(ResultState {
                    breed: prediction.breed,
                    confidence: prediction.confidence,
                    is_dog: prediction.is_dog,
                    message: prediction.message,
                    revealed_at: Instant::now(),
                });
                self.ui.transition(Phase::ResultShown);
            }
            Err(error) => {
                self.notify(error.to_string(), NoticeTone::Error);
                let recovered = if self.ui.preview.is_some() {
                    Phase::PreviewShown
                } else {
                    Phase::Idle
                };
                self.ui.transition(recovered);
            }
        }
    }
}
