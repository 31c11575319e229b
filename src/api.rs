// 🌐 HTTP API - Receipt submission and points lookup with Axum

use crate::error::ReceiptError;
use crate::models::{Points, Receipt, ReceiptIdResponse};
use crate::points;
use crate::store::ReceiptStore;
use crate::validation::ReceiptValidator;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{any, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: ReceiptStore,
    /// Reject receipts with unparsable fields at submission time
    pub strict: bool,
}

impl AppState {
    pub fn new(store: ReceiptStore, strict: bool) -> Self {
        AppState { store, strict }
    }
}

// ============================================================================
// Error responses
// ============================================================================

/// JSON body for every non-2xx response
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let details = match &self {
            ReceiptError::Invalid(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /receipts/process - Store a receipt and return its id
///
/// The body is decoded from raw bytes so a missing or foreign
/// Content-Type still gets the 400 treatment on bad JSON.
async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReceiptIdResponse>, ReceiptError> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected malformed receipt body");
        ReceiptError::from(e)
    })?;

    if state.strict {
        ReceiptValidator::validate(&receipt).map_err(|errors| {
            tracing::warn!(errors = errors.len(), "rejected invalid receipt");
            ReceiptError::Invalid(errors)
        })?;
    }

    let id = state.store.put(receipt);
    tracing::info!(%id, "receipt stored");

    Ok(Json(ReceiptIdResponse { id }))
}

/// Any other verb on /receipts/process
async fn process_method_not_allowed(method: Method) -> Response {
    let mut response = ReceiptError::MethodNotAllowed(method.to_string()).into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("POST"));
    response
}

/// /receipts/:id/points - Score a stored receipt (any verb)
async fn receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Points>, ReceiptError> {
    let receipt = state.store.get(&id)?;
    let breakdown = points::breakdown(&receipt);
    tracing::debug!(%id, ?breakdown, "points computed");

    Ok(Json(Points {
        points: breakdown.total(),
    }))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/receipts/process",
            post(process_receipt).fallback(process_method_not_allowed),
        )
        .route("/receipts/:id/points", any(receipt_points))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
