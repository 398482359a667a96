//! Image Synthesis Provider
//!
//! Text-to-image generation behind the [`ImageSynthesizer`] trait. The bundled client
//! talks to Vertex AI Imagen and walks a list of models, falling back to the next one
//! when a request fails outright.

use crate::config::ImagenConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// Raw image returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub model: String,
}

impl GeneratedImage {
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }
}

/// Text-to-image provider client.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    async fn generate(&self, prompt: &str, aspect_ratio: &str) -> Result<GeneratedImage, ApiError>;

    fn provider_name(&self) -> &str;
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
    parameters: PredictParameters<'a>,
}

#[derive(Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters<'a> {
    sample_count: u32,
    aspect_ratio: &'a str,
    safety_setting: &'a str,
    person_generation: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

const SAFETY_SETTING: &str = "block_medium_and_above";
const PERSON_GENERATION: &str = "allow_all";
const IMAGEN_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

fn map_status_error(status: u16, model: &str, body: &str) -> ApiError {
    match status {
        401 | 403 => ApiError::ProviderAuthFailed(format!("Authentication failed: {}", body)),
        404 => ApiError::ProviderModelNotFound(format!("Model not found: {}", model)),
        429 => ApiError::ProviderRateLimit(format!("Rate limit exceeded: {}", body)),
        _ => ApiError::ProviderRequestFailed(format!(
            "Request failed with status {}: {}",
            status, body
        )),
    }
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::ProviderRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::ProviderRequestFailed(format!("Connection error: {}", error))
    } else {
        ApiError::ProviderError(format!("HTTP error: {}", error))
    }
}

/// `Ok(None)` when the model answered but produced no image (e.g. safety filtered).
fn image_from_response(
    response: PredictResponse,
    model: &str,
) -> Result<Option<GeneratedImage>, ApiError> {
    let Some(prediction) = response.predictions.into_iter().next() else {
        return Ok(None);
    };
    let Some(encoded) = prediction.bytes_base64_encoded else {
        return Ok(None);
    };
    let bytes = BASE64
        .decode(encoded.as_bytes())
        .map_err(|e| ApiError::ProviderError(format!("Invalid image payload: {}", e)))?;
    Ok(Some(GeneratedImage {
        bytes,
        mime_type: prediction
            .mime_type
            .unwrap_or_else(|| "image/png".to_string()),
        model: model.to_string(),
    }))
}

/// Try each model in order.
///
/// An attempt that errors moves on to the next model. An attempt that answers without an
/// image ends the run with `GenerationFailed`. When every model errors, the last error is
/// reported.
async fn generate_with_fallback<'a, F, Fut>(
    models: &'a [String],
    mut attempt: F,
) -> Result<GeneratedImage, ApiError>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<Option<GeneratedImage>, ApiError>>,
{
    let mut last_error = None;
    for model in models {
        match attempt(model.as_str()).await {
            Ok(Some(image)) => {
                info!(model = %model, bytes = image.bytes.len(), "Image generated");
                return Ok(image);
            }
            // The model answered; another model is unlikely to do better.
            Ok(None) => {
                warn!(model = %model, "Model returned a response without image data");
                return Err(ApiError::GenerationFailed(format!(
                    "{} did not return an image. Please try again.",
                    model
                )));
            }
            Err(e) => {
                warn!(model = %model, error = %e, "Model failed, trying next");
                last_error = Some(e);
            }
        }
    }

    Err(ApiError::GenerationFailed(match last_error {
        Some(e) => format!("All Imagen models failed. Last error: {}", e),
        None => "No Imagen models configured".to_string(),
    }))
}

/// Vertex AI Imagen client.
pub struct VertexImagenClient {
    client: Client,
    endpoint: String,
    project: String,
    location: String,
    models: Vec<String>,
    access_token: String,
}

impl VertexImagenClient {
    pub fn new(config: &ImagenConfig) -> Result<Self, ApiError> {
        let project = config
            .project
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ApiError::ProviderNotConfigured("imagen.project is not set".to_string()))?;
        let access_token = config
            .access_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ApiError::ProviderNotConfigured("imagen.access_token is not set".to_string())
            })?;
        if config.models.is_empty() {
            return Err(ApiError::ProviderNotConfigured(
                "imagen.models is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(IMAGEN_HTTP_CONNECT_TIMEOUT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::ProviderError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
            project,
            location: config.location.clone(),
            models: config.models.clone(),
            access_token,
        })
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn predict_url(&self, model: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:predict",
            self.endpoint, self.project, self.location, model
        )
    }

    async fn generate_with_model(
        &self,
        model: &str,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<Option<GeneratedImage>, ApiError> {
        let request = PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio,
                safety_setting: SAFETY_SETTING,
                person_generation: PERSON_GENERATION,
            },
        };

        let response = self
            .client
            .post(self.predict_url(model))
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status_error(status, model, &error_text));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ApiError::ProviderError(format!("Failed to parse response: {}", e)))?;
        image_from_response(body, model)
    }
}

#[async_trait]
impl ImageSynthesizer for VertexImagenClient {
    async fn generate(&self, prompt: &str, aspect_ratio: &str) -> Result<GeneratedImage, ApiError> {
        info!(
            prompt_chars = prompt.len(),
            aspect_ratio,
            "Generating image from prompt"
        );

        generate_with_fallback(&self.models, |model| {
            self.generate_with_model(model, prompt, aspect_ratio)
        })
        .await
    }

    fn provider_name(&self) -> &str {
        "vertex-imagen"
    }
}
