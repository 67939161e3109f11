//! File acquisition: click-to-browse and drag-and-drop converge on the same
//! validation and preview pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use eframe::egui;
use rfd::FileDialog;

use crate::egui_app::state::{NoticeTone, Phase, PreviewState};

use super::jobs::JobMessage;
use super::{CandidateFile, Controller, PreviewImage};

/// Extensions accepted as the image family.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff",
];

/// Shown when a selected or dropped file is not an image.
pub const BAD_TYPE_MESSAGE: &str = "Please upload an image file (JPG, PNG, etc).";

/// Preview textures are bounded to this edge length.
const MAX_PREVIEW_EDGE: u32 = 1024;

/// Failures while acquiring or decoding a candidate image.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The file's type does not belong to the image family.
    #[error("{path} is not an image file")]
    NotAnImage { path: PathBuf },
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file's content could not be decoded as an image.
    #[error("Failed to decode {file_name}: {source}")]
    Decode {
        file_name: String,
        source: image::ImageError,
    },
}

/// A candidate decoded off-thread, ready to install as the preview.
#[derive(Debug)]
pub(crate) struct DecodedPreview {
    pub file_name: String,
    pub image: egui::ColorImage,
}

/// Whether the path's extension belongs to the image family.
pub fn is_image_file(path: &Path) -> bool {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    let lower = extension.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&lower.as_str())
}

impl Controller {
    /// Open the system file chooser; a cancelled dialog is a no-op.
    pub fn browse_for_image(&mut self) {
        let picked = FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file();
        if let Some(path) = picked {
            self.accept_candidate(path);
        }
    }

    /// Toggle the drop-target highlight, independent of validation outcome.
    pub fn set_drop_target_active(&mut self, active: bool) {
        self.ui.drop_zone.active = active;
    }

    /// Handle a file dropped onto the window.
    pub fn handle_dropped_path(&mut self, path: PathBuf) {
        self.ui.drop_zone.active = false;
        self.accept_candidate(path);
    }

    /// Validate a selected file, install it as the candidate, and start the
    /// preview decode. Any later selection replaces the candidate wholesale.
    pub fn accept_candidate(&mut self, path: PathBuf) {
        if !is_image_file(&path) {
            let error = IntakeError::NotAnImage { path };
            tracing::warn!("{error}");
            self.notify(BAD_TYPE_MESSAGE, NoticeTone::Warning);
            return;
        }
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => Arc::new(bytes),
            Err(source) => {
                let error = IntakeError::Read {
                    path: path.clone(),
                    source,
                };
                self.notify(error.to_string(), NoticeTone::Error);
                return;
            }
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        tracing::info!("Selected candidate {} ({} bytes)", path.display(), bytes.len());
        self.candidate = Some(CandidateFile {
            path,
            file_name: file_name.clone(),
            bytes: bytes.clone(),
        });
        self.spawn_preview_decode(file_name, bytes);
    }

    fn spawn_preview_decode(&mut self, file_name: String, bytes: Arc<Vec<u8>>) {
        let request_id = self.jobs.next_preview_id();
        let tx = self.jobs.sender();
        std::thread::spawn(move || {
            let result = decode_preview(file_name, &bytes);
            let _ = tx.send(JobMessage::PreviewDecoded { request_id, result });
        });
    }

    /// Install a finished preview decode, dropping superseded results.
    pub(crate) fn apply_preview_message(
        &mut self,
        request_id: u64,
        result: Result<DecodedPreview, IntakeError>,
    ) {
        if !self.jobs.is_latest_preview(request_id) {
            tracing::debug!("Dropping superseded preview decode {request_id}");
            return;
        }
        match result {
            Ok(decoded) => {
                // Idempotent reset: a fresh preview clears prior artifacts.
                self.ui.result = None;
                self.clear_notices();
                let size = decoded.image.size;
                self.preview_image = Some(PreviewImage {
                    version: request_id,
                    image: decoded.image,
                });
                self.ui.preview = Some(PreviewState {
                    file_name: decoded.file_name,
                    size,
                    version: request_id,
                    shown_at: Instant::now(),
                });
                self.ui.transition(Phase::PreviewShown);
            }
            Err(error) => {
                self.notify(error.to_string(), NoticeTone::Error);
            }
        }
    }
}

/// Decode image bytes into an RGBA preview, bounded for texture upload.
pub(crate) fn decode_preview(
    file_name: String,
    bytes: &[u8],
) -> Result<DecodedPreview, IntakeError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| IntakeError::Decode {
        file_name: file_name.clone(),
        source,
    })?;
    // Shrink-only: `thumbnail` resizes to fit in both directions and would
    // blow small images up to the full edge length.
    let bounded = if decoded.width() > MAX_PREVIEW_EDGE || decoded.height() > MAX_PREVIEW_EDGE {
        decoded.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE)
    } else {
        decoded
    };
    let rgba = bounded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Ok(DecodedPreview { file_name, image })
}
