//! Client for the remote classification service.

pub mod api;
pub mod multipart;

pub use api::{Prediction, PredictError, classify};
