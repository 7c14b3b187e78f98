//! Parades Webhook Lambda - Answers the `inquiry.parades` assistant intent.
//!
//! Receives API.AI webhook requests, dispatches on the matched action and replies
//! with the parade schedule.

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{from_error, json_response};
use shared::{handle_request, ActionHandler, ActionMap, ApiAiAssistant, Config, Responder};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const PARADES_INTENT: &str = "inquiry.parades";
const PARADE_REPLY: &str = "Chinese New Year Parade in Chinatown from 6pm to 9pm.";

/// Application state shared across requests.
struct AppState {
    config: Config,
}

fn parade(responder: &mut dyn Responder) {
    responder.tell(PARADE_REPLY);
}

/// Signature shared by intent dispatchers.
type Dispatch = fn(&mut dyn Responder) -> shared::Result<()>;

/// Dispatch the responder's intent against the parades action map.
fn handle(responder: &mut dyn Responder) -> shared::Result<()> {
    let mut actions = ActionMap::new();
    actions.insert(PARADES_INTENT, parade as ActionHandler);
    handle_request(responder, &actions)
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    if *event.method() != Method::POST {
        warn!("Rejecting {} request", event.method());
        return from_error(&shared::Error::MethodNotAllowed(event.method().to_string()));
    }

    let assistant = match ApiAiAssistant::from_slice(event.body().as_ref()) {
        Ok(assistant) => assistant.with_source(state.config.response_source.clone()),
        Err(e) => {
            warn!("Failed to parse webhook request: {}", e);
            return from_error(&e);
        }
    };

    info!(
        "Processing action {:?} for session {:?}",
        assistant.request().action(),
        assistant.request().session_id
    );
    debug!("Parameters: {:?}", assistant.request().parameters());

    fulfill(assistant, handle)
}

/// Run `dispatch` and turn its outcome into the webhook response.
fn fulfill(mut assistant: ApiAiAssistant, dispatch: Dispatch) -> Result<Response<Body>, Error> {
    if let Err(e) = dispatch(&mut assistant) {
        warn!("{}", e);
        return from_error(&e);
    }

    match assistant.into_response() {
        Some(reply) => json_response(200, &reply),
        None => from_error(&shared::Error::Internal(
            "Intent handler produced no reply".to_string(),
        )),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState {
        config: Config::from_env(),
    });

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
