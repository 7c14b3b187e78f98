//! API.AI webhook wire types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Webhook request sent by the assistant platform.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiAiRequest {
    pub id: Option<String>,
    pub timestamp: Option<String>,
    pub lang: Option<String>,
    pub session_id: Option<String>,
    pub result: Option<ApiAiResult>,
    pub status: Option<ApiAiStatus>,
    /// Raw payload from the originating surface (e.g. Google Assistant)
    pub original_request: Option<Value>,
}

/// The agent's interpretation of the user's query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiAiResult {
    pub source: Option<String>,
    pub resolved_query: Option<String>,
    /// Action name configured on the matched intent
    pub action: Option<String>,
    pub action_incomplete: Option<bool>,
    pub parameters: Option<Map<String, Value>>,
    pub contexts: Option<Vec<Value>>,
    pub metadata: Option<IntentMetadata>,
    pub fulfillment: Option<Fulfillment>,
    pub score: Option<f64>,
}

/// Metadata about the matched intent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntentMetadata {
    pub intent_id: Option<String>,
    pub intent_name: Option<String>,
    pub webhook_used: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fulfillment {
    pub speech: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiAiStatus {
    pub code: Option<u16>,
    pub error_type: Option<String>,
}

impl ApiAiRequest {
    /// Action name used for dispatch. Empty strings count as absent.
    pub fn action(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|r| r.action.as_deref())
            .filter(|a| !a.is_empty())
    }

    /// Parameters extracted by the agent, if any.
    pub fn parameters(&self) -> Option<&Map<String, Value>> {
        self.result.as_ref().and_then(|r| r.parameters.as_ref())
    }
}

/// Webhook response returned to the assistant platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAiResponse {
    pub speech: String,
    pub display_text: String,
    pub data: ResponseData,
    pub context_out: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseData {
    pub google: GoogleData,
}

/// Google Assistant specific reply fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleData {
    pub expect_user_response: bool,
    pub is_ssml: bool,
    pub no_input_prompts: Vec<Value>,
}
