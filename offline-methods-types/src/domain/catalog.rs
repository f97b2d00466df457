//! Provider catalog records.
//!
//! The provider returns payment methods in two shapes: a plain method, or a
//! method fanned out into several collection points (`payment_places`). Wire
//! records are decoded with every field optional and then resolved into a
//! [`PaymentMethod`] whose [`MethodKind`] makes the shape explicit.
//!
//! A record whose fields have the wrong JSON type is dropped on its own and
//! never fails the rest of the catalog.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, DomainError};

// ─────────────────────────────────────────────────────────────────────────────
// Wire Records
// ─────────────────────────────────────────────────────────────────────────────

/// A payment method as returned by the provider catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPaymentMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_places",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_places: Option<Vec<RawPaymentPlace>>,
}

/// Decodes places one by one. A wrong-typed place becomes an empty record,
/// which resolution later drops, so the array keeps its length.
fn deserialize_places<'de, D>(deserializer: D) -> Result<Option<Vec<RawPaymentPlace>>, D::Error>
where
    D: Deserializer<'de>,
{
    let places = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(places.map(|places| {
        places
            .into_iter()
            .map(|place| {
                serde_json::from_value(place).unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "Malformed payment place");
                    RawPaymentPlace::default()
                })
            })
            .collect()
    }))
}

/// A collection point nested under a [`RawPaymentMethod`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPaymentPlace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Envelope returned by the catalog client: a success flag plus the payload.
///
/// `response` is kept as raw JSON because failed calls carry an error object
/// instead of a method list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub success: bool,
    #[serde(default)]
    pub response: serde_json::Value,
}

impl CatalogResponse {
    /// Builds a successful envelope around a method list.
    pub fn success(methods: Vec<RawPaymentMethod>) -> Self {
        Self {
            success: true,
            response: serde_json::to_value(methods).unwrap_or_default(),
        }
    }

    /// Builds a failed envelope carrying the provider's message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            response: serde_json::json!({ "message": message.into() }),
        }
    }

    /// Folds the envelope into the method list or the reason there is none.
    ///
    /// Only a payload that is not an array is an error. Records that fail to
    /// decode are skipped.
    pub fn into_result(self) -> Result<Vec<RawPaymentMethod>, CatalogError> {
        if !self.success {
            return Err(CatalogError::Unsuccessful(self.response.to_string()));
        }

        let records: Vec<serde_json::Value> = serde_json::from_value(self.response)
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(records
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record) {
                Ok(method) => Some(method),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping undecodable payment method");
                    None
                }
            })
            .collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolved Records
// ─────────────────────────────────────────────────────────────────────────────

/// A collection point with its required fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPlace {
    pub payment_option_id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub status: String,
}

/// Shape of a payment method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodKind {
    /// The method itself is the selectable option.
    Simple,
    /// Each place is a selectable option; the method only groups them.
    Composite { places: Vec<PaymentPlace> },
}

/// A payment method with its required fields present and its shape resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub payment_type_id: String,
    pub status: String,
    pub kind: MethodKind,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DomainError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(DomainError::MissingField(field))
}

impl TryFrom<RawPaymentPlace> for PaymentPlace {
    type Error = DomainError;

    fn try_from(raw: RawPaymentPlace) -> Result<Self, Self::Error> {
        Ok(Self {
            payment_option_id: required(raw.payment_option_id, "payment_option_id")?,
            name: raw.name.unwrap_or_default(),
            thumbnail: raw.thumbnail,
            status: required(raw.status, "status")?,
        })
    }
}

impl TryFrom<RawPaymentMethod> for PaymentMethod {
    type Error = DomainError;

    /// Resolves a wire record.
    ///
    /// An absent or empty `payment_places` array yields [`MethodKind::Simple`].
    /// Malformed places are dropped individually; the method stays composite.
    fn try_from(raw: RawPaymentMethod) -> Result<Self, Self::Error> {
        let id = required(raw.id, "id")?;
        let payment_type_id = required(raw.payment_type_id, "payment_type_id")?;
        let status = required(raw.status, "status")?;

        let kind = match raw.payment_places {
            Some(places) if !places.is_empty() => MethodKind::Composite {
                places: places
                    .into_iter()
                    .filter_map(|place| match PaymentPlace::try_from(place) {
                        Ok(place) => Some(place),
                        Err(e) => {
                            tracing::debug!(
                                method_id = %id,
                                error = %e,
                                "Skipping malformed payment place"
                            );
                            None
                        }
                    })
                    .collect(),
            },
            _ => MethodKind::Simple,
        };

        Ok(Self {
            id,
            name: raw.name.unwrap_or_default(),
            thumbnail: raw.thumbnail,
            payment_type_id,
            status,
            kind,
        })
    }
}
