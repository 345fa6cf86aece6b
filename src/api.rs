//! HTTP endpoints around the analyzer.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::analyzer::{self, AnalysisRequest, AnalysisResult};
use crate::config::{EmptyMessagePolicy, ServerConfig};
use crate::error::{ApiError, Result, ServerError};

/// Shared state for the API routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiState {
    pub empty_message_policy: EmptyMessagePolicy,
}

/// Build the router: `GET /`, `GET /health`, `POST /analyze`.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analyze", post(analyze_message))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until the process stops.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let app = router(ApiState {
        empty_message_policy: config.empty_message_policy,
    });

    info!(addr = %addr, policy = ?config.empty_message_policy, "Honeypot API listening");
    axum::serve(listener, app)
        .await
        .map_err(ServerError::Serve)?;
    Ok(())
}

// ── Liveness ────────────────────────────────────────────────────────────

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Agentic Scam Honeypot API is running",
        "status": "OK"
    }))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "scam-honeypot"
    }))
}

// ── Analysis ────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Any body that doesn't decode to `{"message": "<string>"}` counts as an
/// empty message, which is then subject to the configured policy.
async fn analyze_message(
    State(state): State<ApiState>,
    body: Bytes,
) -> std::result::Result<Json<AnalysisResult>, ApiError> {
    let message = message_from_body(&body);

    if message.trim().is_empty() && state.empty_message_policy == EmptyMessagePolicy::Reject {
        warn!("Rejected empty message");
        return Err(ApiError::EmptyMessage);
    }

    let result = analyzer::analyze(&message);
    debug!(
        is_scam = result.is_scam,
        confidence = result.confidence_score,
        links = result.extracted_intelligence.links.len(),
        upi_ids = result.extracted_intelligence.upi_ids.len(),
        bank_accounts = result.extracted_intelligence.bank_accounts.len(),
        "Message analyzed"
    );
    Ok(Json(result))
}

fn message_from_body(body: &[u8]) -> String {
    match serde_json::from_slice::<AnalysisRequest>(body) {
        Ok(request) => request.message,
        Err(e) => {
            warn!(error = %e, bytes = body.len(), "Unreadable analyze body, treating message as empty");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_message_field() {
        assert_eq!(message_from_body(br#"{"message": "Hi"}"#), "Hi");
    }

    #[test]
    fn ignores_unknown_fields() {
        assert_eq!(
            message_from_body(br#"{"message": "otp", "sender": "x"}"#),
            "otp"
        );
    }

    #[test]
    fn unreadable_bodies_become_empty() {
        assert_eq!(message_from_body(b""), "");
        assert_eq!(message_from_body(b"not json"), "");
        assert_eq!(message_from_body(br#"{"message": 42}"#), "");
        assert_eq!(message_from_body(br#"{"message": null}"#), "");
        assert_eq!(message_from_body(br#"{}"#), "");
    }
}
