//! Client for the vision-model food detection API.
//!
//! Sends a photo plus the list of known food names to a Gemini-style
//! `generateContent` endpoint and parses the structured JSON answer into
//! [`Detection`] values. The base URL is injectable so tests can point the
//! client at a mock server.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::model::detection::Detection;
use crate::server::config::Config;
use crate::server::error::detection::DetectionError;

#[derive(Debug, Clone)]
pub struct DetectionClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

/// Detection as the model reports it, before normalization.
#[derive(Debug, Deserialize)]
struct RawDetection {
    box_2d: [i32; 4],
    label: String,
    #[serde(default)]
    rel_id: Option<i64>,
    #[serde(default)]
    relabel: i32,
}

impl DetectionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.detection_api_url.clone(),
            api_key: config.detection_api_key.clone(),
            model: config.detection_model.clone(),
        }
    }

    /// Creates a client against an explicit base URL, used by tests to
    /// target a mock server.
    pub fn with_base_url(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Runs detection over a base64-encoded image.
    ///
    /// `known_foods` is the full list of food names the model may match
    /// against; a returned `rel_id` indexes into it.
    pub async fn detect(
        &self,
        image_b64: &str,
        mimetype: &str,
        known_foods: &[String],
    ) -> Result<Vec<Detection>, DetectionError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: detection_prompt(known_foods),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mimetype.to_string(),
                            data: image_b64.to_string(),
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: detection_schema(),
            }),
        };

        let text = self.call_api(request).await?;
        let raw: Vec<RawDetection> = serde_json::from_str(&text)
            .map_err(|e| DetectionError::Payload(format!("invalid detection JSON: {e}")))?;

        Ok(raw
            .into_iter()
            .map(|detection| normalize(detection, known_foods.len()))
            .collect())
    }

    async fn call_api(&self, request: GeminiRequest) -> Result<String, DetectionError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DetectionError::Upstream(format!(
                "{status} - {error_text}"
            )));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| DetectionError::Payload(format!("unparseable response body: {e}")))?;

        gemini_response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| DetectionError::Payload("response contained no candidates".to_string()))
    }
}

/// Prompt listing the known foods with their indices, so the model can
/// report matches by `rel_id` instead of free-form names.
fn detection_prompt(known_foods: &[String]) -> String {
    let mut prompt = String::from(
        "Detect every food item in this image. For each item return its \
         bounding box as box_2d = [y_min, x_min, y_max, x_max] on a \
         0-1000 grid. If the item matches one of the known foods below, \
         set label to that exact name, rel_id to its index, and relabel \
         to 0. Otherwise pick a short descriptive label, set rel_id to \
         -1, and set relabel to 1.\n\nKnown foods:\n",
    );
    for (index, name) in known_foods.iter().enumerate() {
        prompt.push_str(&format!("{index}: {name}\n"));
    }
    prompt
}

fn detection_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "box_2d": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "minItems": 4,
                    "maxItems": 4
                },
                "label": { "type": "string" },
                "rel_id": { "type": "integer" },
                "relabel": { "type": "integer" }
            },
            "required": ["box_2d", "label", "rel_id", "relabel"]
        }
    })
}

/// Clamps boxes onto the grid, drops out-of-range `rel_id`s, and folds
/// `relabel` to 0 or 1. The model mostly behaves, but a hallucinated
/// index must not be allowed to address the food list.
fn normalize(raw: RawDetection, known_food_count: usize) -> Detection {
    let rel_id = raw.rel_id.filter(|&id| id >= 0 && (id as usize) < known_food_count);

    Detection {
        box_2d: raw.box_2d.map(|coord| coord.clamp(0, 1000)),
        label: raw.label,
        rel_id,
        relabel: i32::from(raw.relabel != 0),
    }
}
