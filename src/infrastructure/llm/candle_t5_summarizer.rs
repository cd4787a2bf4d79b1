use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::t5;
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;

use crate::application::ports::{BackendInfo, SummarizationError, Summarizer, Summary};
use crate::application::services::count_words;
use crate::domain::SummarizationRequest;

use super::style_formatter::{apply_style, split_into_chunks};

const MAX_CHUNK_CHARS: usize = 1024;
const MAX_INPUT_TOKENS: usize = 512;
const MAX_NEW_TOKENS: usize = 512;
const TASK_PREFIX: &str = "summarize: ";

/// Local seq2seq summarizer (T5 family) running on Candle.
pub struct CandleT5Summarizer {
    runtime: Arc<Mutex<T5Runtime>>,
    model_id: String,
}

struct T5Runtime {
    model: t5::T5ForConditionalGeneration,
    tokenizer: Tokenizer,
    config: t5::Config,
    device: Device,
}

impl CandleT5Summarizer {
    pub fn new(model_id: &str) -> Result<Self, SummarizationError> {
        let device = Device::Cpu;

        tracing::info!(
            device = ?device,
            model = model_id,
            "Initializing local Candle T5 summarization model"
        );

        let api = Api::new().map_err(|e| SummarizationError::ModelLoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| SummarizationError::ModelLoadFailed(format!("config.json: {}", e)))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| SummarizationError::ModelLoadFailed(format!("tokenizer.json: {}", e)))?;
        let weights_path = repo.get("model.safetensors").map_err(|e| {
            SummarizationError::ModelLoadFailed(format!("model.safetensors: {}", e))
        })?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| SummarizationError::ModelLoadFailed(format!("read config: {}", e)))?;
        let config: t5::Config = serde_json::from_str(&config_contents)
            .map_err(|e| SummarizationError::ModelLoadFailed(format!("parse config: {}", e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| SummarizationError::ModelLoadFailed(format!("tokenizer: {}", e)))?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
                .map_err(|e| SummarizationError::ModelLoadFailed(format!("weights: {}", e)))?
        };

        let model = t5::T5ForConditionalGeneration::load(vb, &config)
            .map_err(|e| SummarizationError::ModelLoadFailed(format!("model: {}", e)))?;

        tracing::info!("Local Candle T5 summarization model loaded successfully");

        Ok(Self {
            runtime: Arc::new(Mutex::new(T5Runtime {
                model,
                tokenizer,
                config,
                device,
            })),
            model_id: model_id.to_string(),
        })
    }
}

#[async_trait]
impl Summarizer for CandleT5Summarizer {
    async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<Summary, SummarizationError> {
        let runtime = Arc::clone(&self.runtime);
        let request = request.clone();

        let text = tokio::task::spawn_blocking(move || {
            let mut runtime = runtime.lock().map_err(|_| {
                SummarizationError::InferenceFailed("t5 runtime poisoned".to_string())
            })?;
            runtime.summarize(&request)
        })
        .await
        .map_err(|e| SummarizationError::InferenceFailed(format!("task join error: {e}")))??;

        Ok(Summary {
            text,
            model: self.model_id.clone(),
        })
    }

    fn info(&self) -> BackendInfo {
        BackendInfo::new("local", &self.model_id)
    }
}

impl T5Runtime {
    /// Summarizes each chunk, then condenses the joined chunk summaries once
    /// more when they still exceed the word limit.
    fn summarize(&mut self, request: &SummarizationRequest) -> Result<String, SummarizationError> {
        let max_new_tokens = (request.max_length * 2).min(MAX_NEW_TOKENS);
        let chunks = split_into_chunks(&request.text, MAX_CHUNK_CHARS);

        tracing::debug!(chunks = chunks.len(), "Summarizing text locally");

        let mut partials = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            partials.push(self.generate(chunk, max_new_tokens)?);
        }

        let mut summary = partials.join(" ");
        if partials.len() > 1 && count_words(&summary) > request.max_length {
            summary = self.generate(&summary, max_new_tokens)?;
        }

        Ok(apply_style(&summary, request.style))
    }

    fn generate(
        &mut self,
        text: &str,
        max_new_tokens: usize,
    ) -> Result<String, SummarizationError> {
        let encoding = self
            .tokenizer
            .encode(format!("{}{}", TASK_PREFIX, text), true)
            .map_err(|e| SummarizationError::InferenceFailed(format!("tokenize: {}", e)))?;
        let mut input_ids = encoding.get_ids().to_vec();
        input_ids.truncate(MAX_INPUT_TOKENS);

        let input = Tensor::new(input_ids.as_slice(), &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(infer)?;
        let encoder_output = self.model.encode(&input).map_err(infer)?;

        let start_token = self
            .config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32;
        let mut output_ids = vec![start_token];

        for step in 0..max_new_tokens {
            let decoder_input = if step == 0 || !self.config.use_cache {
                Tensor::new(output_ids.as_slice(), &self.device)
            } else {
                let last = output_ids[output_ids.len() - 1];
                Tensor::new(&[last], &self.device)
            }
            .and_then(|t| t.unsqueeze(0))
            .map_err(infer)?;

            let logits = self
                .model
                .decode(&decoder_input, &encoder_output)
                .and_then(|l| l.squeeze(0))
                .map_err(infer)?;
            let next_token = logits
                .argmax(0)
                .and_then(|t| t.to_scalar::<u32>())
                .map_err(infer)?;

            if next_token as usize == self.config.eos_token_id {
                break;
            }
            output_ids.push(next_token);
        }

        self.model.clear_kv_cache();

        let text = self
            .tokenizer
            .decode(&output_ids[1..], true)
            .map_err(|e| SummarizationError::InferenceFailed(format!("detokenize: {}", e)))?;

        Ok(text.trim().to_string())
    }
}

fn infer(e: candle_core::Error) -> SummarizationError {
    SummarizationError::InferenceFailed(e.to_string())
}
