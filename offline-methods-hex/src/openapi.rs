//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use offline_methods_types::domain::{CheckoutOption, StoreId};
use offline_methods_types::dto::{CheckoutConfig, FinalConfig, Logo};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Checkout configuration of the offline payment methods family
#[utoipa::path(
    get,
    path = "/api/stores/{store_id}/checkout-config",
    tag = "checkout",
    params(
        ("store_id" = u32, Path, description = "Store view ID")
    ),
    responses(
        (status = 200, description = "Checkout payload, `{}` when the family is inactive", body = CheckoutConfig),
        (status = 400, description = "Invalid store ID"),
        (status = 429, description = "Rate limit exceeded")
    )
)]
async fn checkout_config() {}

/// Offline payment options offered to shoppers
#[utoipa::path(
    get,
    path = "/api/stores/{store_id}/payment-methods-off",
    tag = "checkout",
    params(
        ("store_id" = u32, Path, description = "Store view ID")
    ),
    responses(
        (status = 200, description = "Options sorted by label, empty when the family is inactive", body = Vec<CheckoutOption>),
        (status = 400, description = "Invalid store ID"),
        (status = 429, description = "Rate limit exceeded")
    )
)]
async fn payment_methods_off() {}

/// OpenAPI documentation for the checkout configuration API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Offline Payment Methods API",
        version = "0.1.0",
        description = "Checkout configuration of offline (cash, ATM) payment methods"
    ),
    paths(health, checkout_config, payment_methods_off),
    components(schemas(CheckoutConfig, FinalConfig, Logo, CheckoutOption, StoreId)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "checkout", description = "Checkout configuration"),
    )
)]
pub struct ApiDoc;
