//! The `/analyze` HTTP endpoint.
//!
//! Contract: POST with `{conversationText?, recentTranscript?}`, at least
//! one non-empty; `recentTranscript` wins when both are present. OPTIONS is
//! a CORS preflight and always succeeds; any other method is a 405. All
//! responses, errors included, carry the permissive CORS headers.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use tokio::net::TcpListener;

use leo_analysis::resolve;
use leo_core::config::LeoConfig;
use leo_core::errors::{LeoResult, ServiceError};
use leo_core::model::AnalysisResponse;
use leo_kb::scorer::score_text;
use leo_kb::store::KnowledgeStore;

use crate::fetcher::HttpFetcher;
use crate::llm::LlmClient;
use crate::prompt::build_prompt;

type HttpBody = Full<Bytes>;

const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
];

/// Shared per-process state. Requests are stateless; the knowledge cache is
/// the only thing that persists between them.
#[derive(Clone)]
pub struct AppState {
    store: Arc<KnowledgeStore<HttpFetcher>>,
    llm: Arc<LlmClient>,
    auth_token: Option<String>,
}

impl AppState {
    pub fn new(config: &LeoConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            store: Arc::new(KnowledgeStore::new(
                config.knowledge.clone(),
                HttpFetcher::default(),
            )),
            llm: Arc::new(LlmClient::new(config.llm.clone())?),
            auth_token: config.server.auth_token.clone(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AnalyzeRequest {
    conversation_text: Option<String>,
    recent_transcript: Option<String>,
}

impl AnalyzeRequest {
    /// The text to analyze: the recent transcript when present and non-empty,
    /// otherwise the full conversation text.
    fn text(&self) -> Option<&str> {
        let non_empty = |s: &&String| !s.trim().is_empty();
        self.recent_transcript
            .as_ref()
            .filter(non_empty)
            .or_else(|| self.conversation_text.as_ref().filter(non_empty))
            .map(String::as_str)
    }
}

/// Bind the listener and serve connections until the process is stopped.
pub async fn serve(config: LeoConfig) -> LeoResult<()> {
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .map_err(|e| leo_core::errors::LeoError::Config(format!("bad bind_addr: {e}")))?;

    let state = AppState::new(&config).map_err(leo_core::errors::LeoError::Service)?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");

    loop {
        let (stream, peer) = listener.accept().await?;
        let state = state.clone();
        tokio::spawn(async move {
            let service = service_fn(move |req| handle(state.clone(), req));
            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                tracing::warn!("connection error from {peer}: {e}");
            }
        });
    }
}

/// Top-level request handler; never fails the connection.
pub async fn handle(
    state: AppState,
    req: Request<hyper::body::Incoming>,
) -> Result<Response<HttpBody>, Infallible> {
    let method = req.method().clone();

    let response = match method {
        Method::OPTIONS => text_response(StatusCode::OK, "ok"),
        Method::POST => match analyze(state, req).await {
            Ok(analysis) => json_response(
                StatusCode::OK,
                &serde_json::json!({ "data": analysis }),
            ),
            Err(e) => {
                tracing::error!("analyze request failed: {e}");
                error_response(&e)
            }
        },
        other => error_response(&ServiceError::MethodNotAllowed {
            method: other.to_string(),
        }),
    };

    Ok(response)
}

/// The POST path: auth, body validation, scorer, knowledge load, LLM call,
/// resolution.
async fn analyze(
    state: AppState,
    req: Request<hyper::body::Incoming>,
) -> Result<AnalysisResponse, ServiceError> {
    check_auth(&state, &req)?;

    let body = req
        .into_body()
        .collect()
        .await
        .map_err(|e| ServiceError::InvalidRequest {
            reason: format!("unreadable body: {e}"),
        })?
        .to_bytes();

    let request: AnalyzeRequest =
        serde_json::from_slice(&body).map_err(|e| ServiceError::InvalidRequest {
            reason: format!("invalid JSON: {e}"),
        })?;

    let text = request.text().ok_or_else(|| ServiceError::InvalidRequest {
        reason: "no text provided".to_string(),
    })?;

    let candidates = score_text(text);
    let docs = state.store.load_all().await;
    let prompt = build_prompt(text, &docs, &candidates);

    tracing::debug!(
        chars = text.chars().count(),
        candidates = candidates.len(),
        "dispatching analysis"
    );

    let raw = state.llm.analyze(prompt).await?;
    Ok(resolve(raw, text, &candidates))
}

/// Bearer-token check; a no-op when no token is configured.
fn check_auth(state: &AppState, req: &Request<hyper::body::Incoming>) -> Result<(), ServiceError> {
    let Some(expected) = &state.auth_token else {
        return Ok(());
    };

    let presented = req
        .headers()
        .get(hyper::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if presented == Some(expected.as_str()) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

fn error_response(error: &ServiceError) -> Response<HttpBody> {
    let status =
        StatusCode::from_u16(error.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_response(status, &serde_json::json!({ "error": error.to_string() }))
}

fn json_response(status: StatusCode, value: &serde_json::Value) -> Response<HttpBody> {
    let body = serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec());
    with_cors(Response::builder().status(status))
        .header("content-type", "application/json")
        .body(Full::from(Bytes::from(body)))
        .unwrap_or_default()
}

fn text_response(status: StatusCode, text: &'static str) -> Response<HttpBody> {
    with_cors(Response::builder().status(status))
        .body(Full::from(Bytes::from_static(text.as_bytes())))
        .unwrap_or_default()
}

fn with_cors(mut builder: hyper::http::response::Builder) -> hyper::http::response::Builder {
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    builder
}
