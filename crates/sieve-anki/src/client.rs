use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::template::NoteField;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Get list of deck names
    pub async fn deck_names(&self) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self.invoke("deckNames", json!({})).await?;
        response.into_result()
    }

    /// Get list of model (note type) names
    pub async fn model_names(&self) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self.invoke("modelNames", json!({})).await?;
        response.into_result()
    }

    /// Add a note to Anki
    pub async fn add_note(
        &self,
        deck: &str,
        model: &str,
        fields: &[NoteField],
        tags: &[String],
    ) -> Result<u64> {
        let params = note_params(deck, model, fields, tags);

        let response: AnkiResponse<u64> = self.invoke("addNote", params).await?;
        response.into_result()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        tracing::debug!("AnkiConnect '{}' -> {}", action, response.status());

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

/// `addNote` parameters
pub(crate) fn note_params(
    deck: &str,
    model: &str,
    fields: &[NoteField],
    tags: &[String],
) -> serde_json::Value {
    let fields: serde_json::Map<String, serde_json::Value> = fields
        .iter()
        .map(|f| (f.name.clone(), json!(f.value)))
        .collect();

    json!({
        "note": {
            "deckName": deck,
            "modelName": model,
            "fields": fields,
            "tags": tags
        }
    })
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
pub(crate) struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    pub(crate) fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result
            .context("AnkiConnect returned null result")
    }
}
