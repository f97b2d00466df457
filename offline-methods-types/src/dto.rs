//! Data Transfer Objects (DTOs) exposed to the checkout front end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CheckoutOption;

/// Logo shown next to the payment family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Logo {
    #[schema(example = "https://static.example.com/MercadoPago_PaymentMagento/images/boleto/logo.svg")]
    pub url: String,
    #[schema(example = "Ticket - MercadoPago")]
    pub title: String,
}

/// Checkout configuration of the offline payment methods family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FinalConfig {
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[schema(example = "Boleto, Pix and cash payments")]
    pub title: String,
    /// Whether the payer name is requested at checkout
    pub name_capture: bool,
    /// Whether the payer document is requested at checkout
    pub document_identification_capture: bool,
    /// Display format of the payment expiration date
    #[schema(example = "dd/MM/yyyy")]
    pub expiration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Selectable options, sorted by label
    pub payment_methods_off_active: Vec<CheckoutOption>,
    /// Device fingerprint script link
    pub fingerprint: String,
}

/// Payload handed to the checkout front end.
///
/// Serializes to `{"payment": {"<method code>": {...}}}` when the family is
/// active, and to `{}` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<BTreeMap<String, FinalConfig>>,
}

impl CheckoutConfig {
    /// The payload of an inactive family.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps a family's config under its method code.
    pub fn active(code: impl Into<String>, config: FinalConfig) -> Self {
        Self {
            payment: Some(BTreeMap::from([(code.into(), config)])),
        }
    }

    /// Returns true for the inactive payload.
    pub fn is_empty(&self) -> bool {
        self.payment.as_ref().is_none_or(BTreeMap::is_empty)
    }

    /// Looks up a family's config by method code.
    pub fn method(&self, code: &str) -> Option<&FinalConfig> {
        self.payment.as_ref()?.get(code)
    }
}
