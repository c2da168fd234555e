use crate::config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Upper bound on input plus output tokens.
    pub max_tokens: u32,
    /// Sampling temperature. Not validated here; the service rejects bad values.
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Body of a POST to the instruct endpoint. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructRequest {
    pub model: String,
    pub instruction_text: String,
    pub request_text: String,
    pub generation_options: GenerationOptions,
}

impl InstructRequest {
    pub fn new(
        model: impl Into<String>,
        instruction_text: impl Into<String>,
        request_text: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            instruction_text: instruction_text.into(),
            request_text: request_text.into(),
            generation_options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.generation_options = options;
        self
    }
}

/// `result` stays untyped: only an object carrying `alternatives` counts as output.
#[derive(Debug, Deserialize)]
pub struct InstructResponse {
    #[serde(default)]
    pub result: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct InstructResult {
    #[serde(default)]
    pub alternatives: Option<Vec<Value>>,
}
