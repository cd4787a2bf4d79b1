pub mod audio_decoder;
mod azure_whisper_engine;
mod candle_whisper_engine;
pub mod languages;
mod openai_whisper_engine;
mod transcription_engine_factory;
mod verbose_transcription;

pub use azure_whisper_engine::AzureWhisperEngine;
pub use candle_whisper_engine::CandleWhisperEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::TranscriptionEngineFactory;
pub use verbose_transcription::{HOSTED_DEFAULT_CONFIDENCE, VerboseTranscription};
