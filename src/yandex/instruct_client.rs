use crate::{
    config::ClientConfig,
    error::{Result, YaGptError},
    models::{
        GenerationOptions, GenerationResult, InstructRequest, InstructResponse, InstructResult,
    },
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

const FOLDER_ID_HEADER: &str = "x-folder-id";

/// Client for the instruct endpoint. One call to [`InstructClient::instruct`]
/// is exactly one POST; nothing is retried.
#[derive(Clone)]
pub struct InstructClient {
    client: Client,
    config: ClientConfig,
}

impl InstructClient {
    pub fn new(folder_id: impl Into<String>, iam_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(folder_id, iam_token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // A followed redirect would re-send the POST.
        let mut builder = Client::builder().redirect(Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| YaGptError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn instruct(
        &self,
        model: &str,
        instruction_text: &str,
        request_text: &str,
        options: GenerationOptions,
    ) -> Result<GenerationResult> {
        let request =
            InstructRequest::new(model, instruction_text, request_text).with_options(options);
        self.send(&request).await
    }

    pub async fn send(&self, request: &InstructRequest) -> Result<GenerationResult> {
        let call_id = Uuid::new_v4();

        let body = serde_json::to_vec(request)?;
        let headers = self.build_headers()?;

        log::debug!(
            "[{}] POST {} model={} max_tokens={} temperature={}",
            call_id,
            self.config.endpoint,
            request.model,
            request.generation_options.max_tokens,
            request.generation_options.temperature
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::debug!("[{}] transport failure: {}", call_id, e);
                YaGptError::from(e)
            })?;

        let status = response.status();
        log::debug!("[{}] response status {}", call_id, status);

        if !status.is_success() {
            return Err(YaGptError::TransportError(format!(
                "HTTP status {} for url ({})",
                status,
                response.url()
            )));
        }

        let bytes = response.bytes().await?;

        log::trace!("[{}] response body: {}", call_id, String::from_utf8_lossy(&bytes));

        Self::parse_response(&bytes)
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", self.config.iam_token), "Authorization")?,
        );
        headers.insert(
            HeaderName::from_static(FOLDER_ID_HEADER),
            header_value(&self.config.folder_id, FOLDER_ID_HEADER)?,
        );
        Ok(headers)
    }

    fn parse_response(bytes: &[u8]) -> Result<GenerationResult> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(YaGptError::UnexpectedError(format!(
                "response body is not a JSON object: {}",
                value
            )));
        }

        let response: InstructResponse = serde_json::from_value(value)?;
        let alternatives = match response.result {
            Some(result @ Value::Object(_)) => {
                serde_json::from_value::<InstructResult>(result)?.alternatives
            }
            _ => None,
        };
        Ok(GenerationResult::from(alternatives))
    }
}

// The header value itself is left out of the message; it may be the token.
fn header_value(raw: &str, name: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw)
        .map_err(|e| YaGptError::UnexpectedError(format!("invalid {} header value: {}", name, e)))
}
