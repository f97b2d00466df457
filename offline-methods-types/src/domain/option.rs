//! Selectable checkout option.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::catalog::{PaymentMethod, PaymentPlace};

/// A flattened, display-ready offline payment option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutOption {
    /// Identifier the shopper selects: the method id, or the place's option id.
    #[schema(example = "7eleven")]
    pub value: String,
    /// Display name.
    #[schema(example = "7 Eleven")]
    pub label: String,
    /// Thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Parent method id, even when the option comes from a place.
    #[schema(example = "paycash")]
    pub payment_method_id: String,
    #[schema(example = "ticket")]
    pub payment_type_id: String,
    /// Present only for options that come from a place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_option_id: Option<String>,
}

impl CheckoutOption {
    /// Option for a method offered as a whole.
    pub fn from_method(method: &PaymentMethod) -> Self {
        Self {
            value: method.id.clone(),
            label: method.name.clone(),
            logo: method.thumbnail.clone(),
            payment_method_id: method.id.clone(),
            payment_type_id: method.payment_type_id.clone(),
            payment_option_id: None,
        }
    }

    /// Option for one collection point of a method.
    pub fn from_place(method: &PaymentMethod, place: &PaymentPlace) -> Self {
        Self {
            value: place.payment_option_id.clone(),
            label: place.name.clone(),
            logo: place.thumbnail.clone(),
            payment_method_id: method.id.clone(),
            payment_type_id: method.payment_type_id.clone(),
            payment_option_id: Some(place.payment_option_id.clone()),
        }
    }
}
