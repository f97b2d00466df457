//! Filtering rules applied to the provider catalog.

/// Checkout code of the offline payment methods family.
///
/// The produced payload is namespaced under this key.
pub const METHOD_CODE: &str = "mercadopago_paymentmagento_payment_methods_off";

/// Payment types settled outside immediate online capture.
pub const PAYMENT_TYPE_ID_ALLOWED: [&str; 2] = ["ticket", "atm"];

/// Status a method or place must report to be offered.
pub const PAYMENT_STATUS_ACTIVE: &str = "active";

/// Static asset path of the checkout logo.
pub const PATH_LOGO: &str = "MercadoPago_PaymentMagento::images/boleto/logo.svg";

/// Title shown alongside the checkout logo.
pub const LOGO_TITLE: &str = "Ticket - MercadoPago";

/// Which catalog entries qualify as offline methods, and how the family is branded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Allowed `payment_type_id` values.
    pub allowed_payment_types: Vec<String>,
    /// Required `status` value for methods and places.
    pub active_status: String,
    /// Asset path handed to the resolver for the logo.
    pub logo_path: String,
    /// Title attached to the resolved logo.
    pub logo_title: String,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            allowed_payment_types: PAYMENT_TYPE_ID_ALLOWED
                .iter()
                .map(|t| t.to_string())
                .collect(),
            active_status: PAYMENT_STATUS_ACTIVE.to_string(),
            logo_path: PATH_LOGO.to_string(),
            logo_title: LOGO_TITLE.to_string(),
        }
    }
}

impl FilterPolicy {
    /// Replaces the allowed payment types.
    pub fn with_payment_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.allowed_payment_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the payment type is part of the offline family.
    pub fn allows_type(&self, payment_type_id: &str) -> bool {
        self.allowed_payment_types
            .iter()
            .any(|allowed| allowed == payment_type_id)
    }

    /// Returns true if the status marks the entry as offerable.
    pub fn is_active(&self, status: &str) -> bool {
        self.active_status == status
    }
}
