pub mod api_types;
mod error;
mod health;
mod status;
mod summarize;
mod transcribe;

pub use error::ApiError;
pub use health::{SERVICE_NAME, health_handler, root_handler};
pub use status::{summarization_status_handler, transcription_status_handler};
pub use summarize::{summarize_batch_handler, summarize_handler};
pub use transcribe::transcribe_handler;
