mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LimitSettings, LoggingSettings, ServerSettings, Settings, SummarizationProviderSetting,
    SummarizationSettings, TranscriptionProviderSetting, TranscriptionSettings,
};
