use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_nn::ops::softmax;
use candle_transformers::models::whisper::{self as m, Config};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;

use crate::application::ports::{
    BackendInfo, Transcript, TranscriptionEngine, TranscriptionError,
};
use crate::domain::TranscriptionRequest;

use super::audio_decoder::decode_audio;
use super::languages::WHISPER_LANGUAGES;

const MAX_DECODE_TOKENS: usize = 224;
const MEL_FILTERS_REPO: &str = "FL33TW00D-HF/whisper-base";

pub struct CandleWhisperEngine {
    runtime: Arc<Mutex<WhisperRuntime>>,
    model_id: String,
}

struct WhisperRuntime {
    model: m::model::Whisper,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
    mel_filters: Vec<f32>,
    /// `(code, token id)` for every language token the tokenizer knows.
    /// Empty for English-only checkpoints.
    language_tokens: Vec<(&'static str, u32)>,
}

struct DecodedSegment {
    text: String,
    probability_sum: f32,
    token_count: usize,
}

impl CandleWhisperEngine {
    pub fn new(model_id: &str) -> Result<Self, TranscriptionError> {
        let device = Device::Cpu;

        tracing::info!(
            device = ?device,
            model = model_id,
            "Initializing Candle Whisper transcription engine"
        );

        let api = Api::new().map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("config.json: {}", e)))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("tokenizer.json: {}", e)))?;
        let weights_path = repo.get("model.safetensors").map_err(|e| {
            TranscriptionError::ModelLoadFailed(format!("model.safetensors: {}", e))
        })?;

        let mel_repo = api.repo(Repo::new(MEL_FILTERS_REPO.to_string(), RepoType::Model));
        let mel_bytes_path = mel_repo
            .get("melfilters.bytes")
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("melfilters.bytes: {}", e)))?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("read config: {}", e)))?;
        let config: Config = serde_json::from_str(&config_contents)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("parse config: {}", e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("tokenizer: {}", e)))?;

        let mel_bytes = std::fs::read(&mel_bytes_path)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("mel filters: {}", e)))?;
        let mel_filters = read_mel_filters(&mel_bytes, &config)?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], m::DTYPE, &device)
                .map_err(|e| TranscriptionError::ModelLoadFailed(format!("weights: {}", e)))?
        };

        let model = m::model::Whisper::load(&vb, config.clone())
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("model: {}", e)))?;

        let language_tokens = if model_id.ends_with(".en") {
            Vec::new()
        } else {
            WHISPER_LANGUAGES
                .iter()
                .filter_map(|(code, _)| {
                    tokenizer
                        .token_to_id(&format!("<|{}|>", code))
                        .map(|id| (*code, id))
                })
                .collect()
        };

        tracing::info!(
            multilingual = !language_tokens.is_empty(),
            "Candle Whisper engine loaded successfully"
        );

        Ok(Self {
            runtime: Arc::new(Mutex::new(WhisperRuntime {
                model,
                tokenizer,
                config,
                device,
                mel_filters,
                language_tokens,
            })),
            model_id: model_id.to_string(),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for CandleWhisperEngine {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError> {
        let data = request.data.clone();
        let format = request.format;
        let runtime = Arc::clone(&self.runtime);

        tokio::task::spawn_blocking(move || {
            let audio = decode_audio(&data, format)?;
            let mut runtime = runtime.lock().map_err(|_| {
                TranscriptionError::InferenceFailed("whisper runtime poisoned".to_string())
            })?;
            let mut transcript = runtime.run(&audio.samples)?;
            transcript.duration_secs = Some(audio.duration_secs);
            Ok(transcript)
        })
        .await
        .map_err(|e| TranscriptionError::InferenceFailed(format!("task join error: {e}")))?
    }

    fn info(&self) -> BackendInfo {
        BackendInfo::new("local", &self.model_id)
    }
}

impl WhisperRuntime {
    fn run(&mut self, pcm: &[f32]) -> Result<Transcript, TranscriptionError> {
        let mel_tensors = self.mel_segments(pcm)?;

        let language = match mel_tensors.first() {
            Some(mel) if !self.language_tokens.is_empty() => self.detect_language(mel)?,
            _ => "en",
        };
        let language_token = self
            .language_tokens
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, id)| *id);

        let mut texts = Vec::new();
        let mut probability_sum = 0.0f32;
        let mut token_count = 0usize;

        for (i, mel) in mel_tensors.iter().enumerate() {
            tracing::debug!(segment = i, "Transcribing audio segment");
            let segment = self.decode_segment(mel, language_token)?;
            probability_sum += segment.probability_sum;
            token_count += segment.token_count;
            if !segment.text.is_empty() {
                texts.push(segment.text);
            }
        }

        let confidence = (token_count > 0).then(|| probability_sum / token_count as f32);

        tracing::info!(
            segments = texts.len(),
            language,
            "Audio transcription completed"
        );

        Ok(Transcript {
            text: texts.join(" "),
            language: Some(language.to_string()),
            confidence,
            duration_secs: None,
        })
    }

    fn mel_segments(&self, pcm: &[f32]) -> Result<Vec<Tensor>, TranscriptionError> {
        let n_mel = self.config.num_mel_bins;

        pcm.chunks(m::N_SAMPLES)
            .map(|chunk| {
                let mut samples = chunk.to_vec();
                samples.resize(m::N_SAMPLES, 0.0);

                let mel_data = m::audio::pcm_to_mel(&self.config, &samples, &self.mel_filters);
                let n_frames = mel_data.len() / n_mel;

                Tensor::from_vec(mel_data, (1, n_mel, n_frames), &self.device)
                    .map_err(|e| TranscriptionError::InferenceFailed(format!("mel tensor: {}", e)))
            })
            .collect()
    }

    /// Picks the most probable language token after `<|startoftranscript|>`.
    fn detect_language(&mut self, mel: &Tensor) -> Result<&'static str, TranscriptionError> {
        let sot_token = token_id(&self.tokenizer, m::SOT_TOKEN)?;

        let audio_features = self.model.encoder.forward(mel, true).map_err(infer)?;
        let tokens = Tensor::new(&[sot_token], &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(infer)?;
        let hidden = self
            .model
            .decoder
            .forward(&tokens, &audio_features, true)
            .map_err(infer)?;
        let logits = self
            .model
            .decoder
            .final_linear(&hidden.squeeze(0).map_err(infer)?)
            .and_then(|l| l.get(0))
            .map_err(infer)?;

        let ids: Vec<u32> = self.language_tokens.iter().map(|(_, id)| *id).collect();
        let ids = Tensor::new(ids.as_slice(), &self.device).map_err(infer)?;
        let probs: Vec<f32> = logits
            .index_select(&ids, 0)
            .and_then(|l| softmax(&l, 0))
            .and_then(|p| p.to_vec1())
            .map_err(infer)?;

        self.model.reset_kv_cache();

        let best = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| self.language_tokens[idx].0)
            .unwrap_or("en");

        tracing::debug!(language = best, "Detected spoken language");
        Ok(best)
    }

    fn decode_segment(
        &mut self,
        mel: &Tensor,
        language_token: Option<u32>,
    ) -> Result<DecodedSegment, TranscriptionError> {
        let sot_token = token_id(&self.tokenizer, m::SOT_TOKEN)?;
        let transcribe_token = token_id(&self.tokenizer, m::TRANSCRIBE_TOKEN)?;
        let no_timestamps_token = token_id(&self.tokenizer, m::NO_TIMESTAMPS_TOKEN)?;
        let eot_token = token_id(&self.tokenizer, m::EOT_TOKEN)?;

        let audio_features = self.model.encoder.forward(mel, true).map_err(infer)?;

        let mut tokens = vec![sot_token];
        tokens.extend(language_token);
        tokens.push(transcribe_token);
        tokens.push(no_timestamps_token);
        let prefix_len = tokens.len();

        let mut probability_sum = 0.0f32;

        for step in 0..MAX_DECODE_TOKENS {
            let token_tensor = Tensor::new(tokens.as_slice(), &self.device)
                .and_then(|t| t.unsqueeze(0))
                .map_err(infer)?;

            let decoder_output = self
                .model
                .decoder
                .forward(&token_tensor, &audio_features, step == 0)
                .map_err(infer)?;

            let logits = self
                .model
                .decoder
                .final_linear(&decoder_output.squeeze(0).map_err(infer)?)
                .map_err(infer)?;

            let seq_len = logits.dim(0).map_err(infer)?;
            let last_logits = logits.get(seq_len - 1).map_err(infer)?;

            let next_token = last_logits
                .argmax(0)
                .and_then(|t| t.to_scalar::<u32>())
                .map_err(infer)?;

            if next_token == eot_token {
                break;
            }

            let probability = softmax(&last_logits, 0)
                .and_then(|p| p.get(next_token as usize))
                .and_then(|p| p.to_scalar::<f32>())
                .map_err(infer)?;
            probability_sum += probability;

            tokens.push(next_token);
        }

        self.model.reset_kv_cache();

        let generated = &tokens[prefix_len..];
        let text = self
            .tokenizer
            .decode(generated, true)
            .map_err(|e| TranscriptionError::InferenceFailed(format!("detokenize: {}", e)))?;

        Ok(DecodedSegment {
            text: text.trim().to_string(),
            probability_sum,
            token_count: generated.len(),
        })
    }
}

fn infer(e: candle_core::Error) -> TranscriptionError {
    TranscriptionError::InferenceFailed(e.to_string())
}

fn token_id(tokenizer: &Tokenizer, token: &str) -> Result<u32, TranscriptionError> {
    tokenizer
        .token_to_id(token)
        .ok_or_else(|| TranscriptionError::InferenceFailed(format!("token not found: {}", token)))
}

fn read_mel_filters(bytes: &[u8], config: &Config) -> Result<Vec<f32>, TranscriptionError> {
    let expected_len = config.num_mel_bins * (m::N_FFT / 2 + 1);
    if bytes.len() < expected_len * 4 {
        return Err(TranscriptionError::ModelLoadFailed(format!(
            "mel filters file too small: {} bytes, expected at least {}",
            bytes.len(),
            expected_len * 4
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .take(expected_len)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
