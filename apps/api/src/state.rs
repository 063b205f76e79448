use std::sync::Arc;

use crate::extract::TextExtractor;
use crate::model_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both collaborators sit behind trait objects so endpoint tests can swap in
/// doubles without network access or real PDFs.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelClient>,
    pub extractor: Arc<dyn TextExtractor>,
}
