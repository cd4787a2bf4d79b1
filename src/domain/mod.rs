mod audio_format;
mod summarization;
mod summary_style;
mod transcription;

pub use audio_format::AudioFormat;
pub use summarization::{SummarizationRequest, SummarizationResult, SummaryInput};
pub use summary_style::SummaryStyle;
pub use transcription::{AudioUpload, TranscriptionRequest, TranscriptionResult};
