//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use offline_methods_types::{
    AppError, AssetResolver, MethodsOffSettings, PaymentMethodCatalog, StoreId,
};

use crate::OfflineMethodsService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<S, C, A>
where
    S: MethodsOffSettings,
    C: PaymentMethodCatalog,
    A: AssetResolver,
{
    pub service: OfflineMethodsService<S, C, A>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_store_id(raw: &str) -> Result<StoreId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError(AppError::BadRequest(format!("Invalid store ID: {}", raw))))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Checkout configuration for a store.
#[tracing::instrument(skip(state), fields(store_id = %id))]
pub async fn checkout_config<S, C, A>(
    State(state): State<Arc<AppState<S, C, A>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    S: MethodsOffSettings,
    C: PaymentMethodCatalog,
    A: AssetResolver,
{
    let store = parse_store_id(&id)?;
    let config = state.service.checkout_config(store).await;
    Ok(Json(config))
}

/// Offline payment options offered to shoppers of a store.
#[tracing::instrument(skip(state), fields(store_id = %id))]
pub async fn payment_methods_off<S, C, A>(
    State(state): State<Arc<AppState<S, C, A>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    S: MethodsOffSettings,
    C: PaymentMethodCatalog,
    A: AssetResolver,
{
    let store = parse_store_id(&id)?;
    let options = state.service.offered_options(store).await;
    Ok(Json(options))
}

/// OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError(AppError::NotFound(format!("No route for {}", uri.path())))
}
