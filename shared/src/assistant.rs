//! Assistant reply capability and action dispatch.
//!
//! A webhook registers one handler per action name in an [`ActionMap`] and hands
//! it to [`handle_request`] together with a [`Responder`]. The responder knows
//! which action the platform matched and how to serialize a reply for it.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{ApiAiRequest, ApiAiResponse, GoogleData, ResponseData};
use crate::{Error, Result};

/// Capability to read the matched intent and issue a reply.
pub trait Responder {
    /// Action name the platform matched, if any.
    fn intent(&self) -> Option<&str>;

    /// Issue a final reply and end the conversation.
    fn tell(&mut self, speech: &str);
}

/// Function invoked when its action matches.
pub type ActionHandler = fn(&mut dyn Responder);

/// Action name to handler lookup.
pub type ActionMap = HashMap<&'static str, ActionHandler>;

/// Dispatch the responder's intent to its registered handler.
///
/// Returns [`Error::NoMatchingIntent`] without invoking anything when no handler
/// is registered for the intent.
pub fn handle_request(responder: &mut dyn Responder, actions: &ActionMap) -> Result<()> {
    let intent = responder.intent().map(str::to_owned);

    match intent.as_deref().and_then(|name| actions.get(name)) {
        Some(handler) => {
            debug!("Dispatching action {:?}", intent);
            handler(responder);
            Ok(())
        }
        None => Err(Error::NoMatchingIntent(
            intent.unwrap_or_else(|| "null".to_string()),
        )),
    }
}

/// True when the speech is wrapped in a `<speak>` element.
fn is_ssml(speech: &str) -> bool {
    let speech = speech.trim();
    (speech.starts_with("<speak>") || speech.starts_with("<speak "))
        && speech.ends_with("</speak>")
}

/// Responder backed by an API.AI webhook request.
#[derive(Debug)]
pub struct ApiAiAssistant {
    request: ApiAiRequest,
    source: Option<String>,
    reply: Option<ApiAiResponse>,
}

impl ApiAiAssistant {
    pub fn new(request: ApiAiRequest) -> Self {
        Self {
            request,
            source: None,
            reply: None,
        }
    }

    /// Parse a webhook body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Err(Error::Validation("Missing request body".to_string()));
        }
        let request = serde_json::from_slice(body)
            .map_err(|e| Error::Validation(format!("Invalid request body: {}", e)))?;
        Ok(Self::new(request))
    }

    /// Report `source` in every reply.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn request(&self) -> &ApiAiRequest {
        &self.request
    }

    pub fn reply(&self) -> Option<&ApiAiResponse> {
        self.reply.as_ref()
    }

    pub fn into_response(self) -> Option<ApiAiResponse> {
        self.reply
    }
}

impl Responder for ApiAiAssistant {
    fn intent(&self) -> Option<&str> {
        self.request.action()
    }

    fn tell(&mut self, speech: &str) {
        if self.reply.is_some() {
            warn!("Reply already issued, ignoring tell");
            return;
        }

        self.reply = Some(ApiAiResponse {
            speech: speech.to_string(),
            display_text: speech.to_string(),
            data: ResponseData {
                google: GoogleData {
                    expect_user_response: false,
                    is_ssml: is_ssml(speech),
                    no_input_prompts: vec![],
                },
            },
            context_out: vec![],
            source: self.source.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greet(responder: &mut dyn Responder) {
        responder.tell("hello");
    }

    fn greetings() -> ActionMap {
        let mut actions = ActionMap::new();
        actions.insert("greet", greet as ActionHandler);
        actions
    }

    fn assistant(body: &str) -> ApiAiAssistant {
        ApiAiAssistant::from_slice(body.as_bytes()).unwrap()
    }

    #[test]
    fn test_dispatches_matching_action() {
        let mut assistant = assistant(r#"{"result": {"action": "greet"}}"#);
        handle_request(&mut assistant, &greetings()).unwrap();
        assert_eq!(assistant.reply().unwrap().speech, "hello");
    }

    #[test]
    fn test_unmatched_action_is_rejected() {
        let mut assistant = assistant(r#"{"result": {"action": "farewell"}}"#);
        let err = handle_request(&mut assistant, &greetings()).unwrap_err();
        assert!(matches!(err, Error::NoMatchingIntent(ref name) if name == "farewell"));
        assert!(assistant.reply().is_none());
    }

    #[test]
    fn test_missing_action_reports_null() {
        let mut assistant = assistant("{}");
        let err = handle_request(&mut assistant, &greetings()).unwrap_err();
        assert_eq!(err.to_string(), "No matching intent handler for: null");
    }

    #[test]
    fn test_tell_builds_final_reply() {
        let mut assistant = assistant("{}").with_source(Some("demo-tour-guide".to_string()));
        assistant.tell("See you there.");

        let reply = assistant.into_response().unwrap();
        assert_eq!(reply.display_text, "See you there.");
        assert!(!reply.data.google.expect_user_response);
        assert!(!reply.data.google.is_ssml);
        assert_eq!(reply.source.as_deref(), Some("demo-tour-guide"));
    }

    #[test]
    fn test_ssml_detected() {
        let mut assistant = assistant("{}");
        assistant.tell("<speak>Hi</speak>");
        assert!(assistant.reply().unwrap().data.google.is_ssml);
    }

    #[test]
    fn test_ssml_requires_speak_element() {
        assert!(is_ssml(r#"<speak version="1.1">Hi</speak>"#));
        assert!(!is_ssml("<speaker> says hi"));
        assert!(!is_ssml("<speak>unterminated"));
        assert!(!is_ssml("plain text"));
    }

    #[test]
    fn test_second_tell_ignored() {
        let mut assistant = assistant("{}");
        assistant.tell("first");
        assistant.tell("second");
        assert_eq!(assistant.reply().unwrap().speech, "first");
    }

    #[test]
    fn test_empty_body_rejected() {
        let err = ApiAiAssistant::from_slice(b"").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = ApiAiAssistant::from_slice(b"{not json").unwrap_err();
        assert!(err.to_string().starts_with("Validation error: Invalid request body"));
    }
}
