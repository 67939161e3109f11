use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;

use crate::config::AppConfig;
use crate::egui_app::state::{NoticeTone, Phase};
use crate::predict::{PredictError, Prediction};

use super::intake::{BAD_TYPE_MESSAGE, DecodedPreview};
use super::submission::NO_FILE_MESSAGE;
use super::{CandidateFile, Controller};

fn controller() -> Controller {
    Controller::new(AppConfig::default())
}

fn install_candidate(controller: &mut Controller, file_name: &str) {
    controller.candidate = Some(CandidateFile {
        path: PathBuf::from(file_name),
        file_name: file_name.to_string(),
        bytes: Arc::new(vec![0xFF, 0xD8, 0xFF]),
    });
}

fn decoded_preview(file_name: &str) -> DecodedPreview {
    DecodedPreview {
        file_name: file_name.to_string(),
        image: egui::ColorImage::from_rgba_unmultiplied([1, 1], &[0, 0, 0, 255]),
    }
}

fn prediction(breed: &str, confidence: f64, is_dog: bool, message: Option<&str>) -> Prediction {
    Prediction {
        breed: breed.to_string(),
        confidence,
        is_dog,
        message: message.map(str::to_string),
    }
}

fn active_notice(controller: &Controller) -> (&str, NoticeTone) {
    let notice = controller
        .ui
        .notices
        .active
        .as_ref()
        .expect("a notice should be active");
    (notice.message.as_str(), notice.tone)
}

#[test]
fn submit_without_candidate_warns_and_issues_no_request() {
    let mut controller = controller();
    controller.submit();
    assert_eq!(active_notice(&controller), (NO_FILE_MESSAGE, NoticeTone::Warning));
    assert_eq!(controller.jobs.issued_predict_count(), 0);
    assert_eq!(controller.ui.phase, Phase::Idle);
    assert!(controller.ui.loading.is_none());
}

#[test]
fn non_image_selection_warns_and_spawns_no_decode() {
    let mut controller = controller();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"plain text").expect("write");

    controller.accept_candidate(path);

    assert_eq!(active_notice(&controller), (BAD_TYPE_MESSAGE, NoticeTone::Warning));
    assert!(controller.candidate.is_none());
    assert_eq!(controller.jobs.issued_preview_count(), 0);
    assert!(controller.ui.preview.is_none());
}

#[test]
fn non_image_candidate_is_rejected_at_submit() {
    let mut controller = controller();
    install_candidate(&mut controller, "rex.txt");
    controller.submit();
    assert_eq!(active_notice(&controller), (BAD_TYPE_MESSAGE, NoticeTone::Error));
    assert_eq!(controller.jobs.issued_predict_count(), 0);
}

#[test]
fn preview_install_clears_prior_result_and_notices() {
    let mut controller = controller();
    install_candidate(&mut controller, "rex.jpg");
    let job = controller.begin_submission().expect("job");
    controller.apply_predict_message(job.request_id, Ok(prediction("Beagle", 64.0, true, None)));
    controller.notify("stale notice", NoticeTone::Info);
    assert!(controller.ui.result.is_some());

    let request_id = controller.jobs.next_preview_id();
    controller.apply_preview_message(request_id, Ok(decoded_preview("rex.jpg")));

    assert!(controller.ui.result.is_none());
    assert!(!controller.ui.notices.any_visible());
    assert_eq!(controller.ui.phase, Phase::PreviewShown);
    let preview = controller.ui.preview.as_ref().expect("preview");
    assert_eq!(preview.file_name, "rex.jpg");
    assert_eq!(preview.version, request_id);
}

#[test]
fn superseded_preview_decode_is_dropped() {
    let mut controller = controller();
    let first = controller.jobs.next_preview_id();
    let second = controller.jobs.next_preview_id();

    controller.apply_preview_message(first, Ok(decoded_preview("old.jpg")));
    assert!(controller.ui.preview.is_none());

    controller.apply_preview_message(second, Ok(decoded_preview("new.jpg")));
    let preview = controller.ui.preview.as_ref().expect("preview");
    assert_eq!(preview.file_name, "new.jpg");
}

#[test]
fn successful_submission_renders_the_dog_branch() {
    let mut controller = controller();
    install_candidate(&mut controller, "rex.jpg");

    let job = controller.begin_submission().expect("job");
    assert_eq!(controller.ui.phase, Phase::Loading);
    assert!(controller.ui.loading.is_some());
    assert!(controller.ui.result.is_none());

    controller.apply_predict_message(
        job.request_id,
        Ok(prediction("Labrador", 87.5, true, None)),
    );

    assert!(controller.ui.loading.is_none());
    assert_eq!(controller.ui.phase, Phase::ResultShown);
    let result = controller.ui.result.as_ref().expect("result");
    assert_eq!(result.breed, "Labrador");
    assert_eq!(result.confidence, 87.5);
    assert_eq!(result.not_dog_message(), None);
}

#[test]
fn preview_landing_mid_submission_keeps_the_result_renderable() {
    let mut controller = controller();
    install_candidate(&mut controller, "rex.jpg");
    let decode_id = controller.jobs.next_preview_id();
    let job = controller.begin_submission().expect("job");
    assert_eq!(controller.ui.phase, Phase::Loading);

    // The pending decode resolves while the submission is still in flight.
    controller.apply_preview_message(decode_id, Ok(decoded_preview("rex.jpg")));
    assert_eq!(controller.ui.phase, Phase::PreviewShown);

    controller.apply_predict_message(
        job.request_id,
        Ok(prediction("Labrador", 87.5, true, None)),
    );
    assert_eq!(controller.ui.phase, Phase::ResultShown);
    assert!(controller.ui.loading.is_none());
    assert!(controller.ui.result.is_some());
}

#[test]
fn not_dog_message_block_does_not_stack_across_cycles() {
    let mut controller = controller();
    install_candidate(&mut controller, "cat.jpg");

    let job = controller.begin_submission().expect("job");
    controller.apply_predict_message(
        job.request_id,
        Ok(prediction("Unknown", 42.0, false, Some("No dog detected"))),
    );
    let result = controller.ui.result.as_ref().expect("result");
    assert_eq!(result.not_dog_message(), Some("No dog detected"));

    let job = controller.begin_submission().expect("second job");
    controller.apply_predict_message(job.request_id, Ok(prediction("Labrador", 90.0, true, None)));
    let result = controller.ui.result.as_ref().expect("result");
    assert_eq!(result.not_dog_message(), None);
}

#[test]
fn payload_error_clears_loading_without_rendering() {
    let mut controller = controller();
    install_candidate(&mut controller, "rex.jpg");

    let job = controller.begin_submission().expect("job");
    controller.apply_predict_message(
        job.request_id,
        Err(PredictError::Application("model unavailable".into())),
    );

    assert!(controller.ui.loading.is_none());
    assert!(controller.ui.result.is_none());
    assert_eq!(active_notice(&controller), ("model unavailable", NoticeTone::Error));
}

#[test]
fn transport_error_notice_carries_the_status_code() {
    let mut controller = controller();
    install_candidate(&mut controller, "rex.jpg");

    let job = controller.begin_submission().expect("job");
    controller.apply_predict_message(
        job.request_id,
        Err(PredictError::Status {
            code: 500,
            body: "Internal Server Error".into(),
        }),
    );

    assert!(controller.ui.loading.is_none());
    assert!(controller.ui.result.is_none());
    let (message, tone) = active_notice(&controller);
    assert!(message.contains("500"));
    assert_eq!(tone, NoticeTone::Error);
}

#[test]
fn stale_submission_resolution_is_ignored() {
    let mut controller = controller();
    install_candidate(&mut controller, "rex.jpg");

    let first = controller.begin_submission().expect("first job");
    let second = controller.begin_submission().expect("second job");

    controller.apply_predict_message(
        first.request_id,
        Ok(prediction("Poodle", 55.0, true, None)),
    );
    assert!(controller.ui.result.is_none(), "stale response must not render");
    assert!(controller.ui.loading.is_some(), "latest request is still in flight");

    controller.apply_predict_message(
        second.request_id,
        Ok(prediction("Labrador", 87.5, true, None)),
    );
    let result = controller.ui.result.as_ref().expect("result");
    assert_eq!(result.breed, "Labrador");
}
