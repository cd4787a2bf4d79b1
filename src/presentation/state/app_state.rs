use std::sync::Arc;

use crate::application::services::{SummarizationService, TranscriptionService};

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub summarization_service: Arc<SummarizationService>,
}

impl AppState {
    pub fn new(
        transcription_service: Arc<TranscriptionService>,
        summarization_service: Arc<SummarizationService>,
    ) -> Self {
        Self {
            transcription_service,
            summarization_service,
        }
    }
}
