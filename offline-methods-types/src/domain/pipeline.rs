//! Normalization, exclusion filtering and ordering of offline payment options.
//!
//! Every step is pure. Records that do not qualify are dropped, never
//! reported as errors: a missing option is preferable to a broken checkout.

use super::catalog::{MethodKind, PaymentMethod, RawPaymentMethod};
use super::exclusion::ExclusionList;
use super::option::CheckoutOption;
use super::policy::FilterPolicy;

/// Turns a provider catalog into the option list offered at checkout.
#[derive(Debug, Clone, Default)]
pub struct PaymentMethodFilterPipeline {
    policy: FilterPolicy,
}

impl PaymentMethodFilterPipeline {
    /// Creates a pipeline with the given policy.
    pub fn new(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in use.
    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Normalizes, filters and sorts the catalog.
    pub fn run(
        &self,
        methods: Vec<RawPaymentMethod>,
        exclusions: &ExclusionList,
    ) -> Vec<CheckoutOption> {
        sort_by_label(filter_excluded(self.normalize(methods), exclusions))
    }

    /// Flattens qualifying methods and places into options, in catalog order.
    pub fn normalize(&self, methods: Vec<RawPaymentMethod>) -> Vec<CheckoutOption> {
        let mut options = Vec::new();

        for raw in methods {
            let method = match PaymentMethod::try_from(raw) {
                Ok(method) => method,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed payment method");
                    continue;
                }
            };

            if !self.policy.allows_type(&method.payment_type_id)
                || !self.policy.is_active(&method.status)
            {
                continue;
            }

            match &method.kind {
                MethodKind::Simple => {
                    push_labeled(&mut options, CheckoutOption::from_method(&method))
                }
                MethodKind::Composite { places } => {
                    for place in places.iter().filter(|p| self.policy.is_active(&p.status)) {
                        push_labeled(&mut options, CheckoutOption::from_place(&method, place));
                    }
                }
            }
        }

        options
    }
}

fn push_labeled(options: &mut Vec<CheckoutOption>, option: CheckoutOption) {
    if option.label.is_empty() {
        tracing::debug!(value = %option.value, "Skipping payment option without label");
        return;
    }
    options.push(option);
}

/// Drops options whose value is excluded. Relative order is preserved.
pub fn filter_excluded(
    options: Vec<CheckoutOption>,
    exclusions: &ExclusionList,
) -> Vec<CheckoutOption> {
    if exclusions.is_empty() {
        return options;
    }

    options
        .into_iter()
        .filter(|option| !exclusions.contains(&option.value))
        .collect()
}

/// Stable ascending sort on the label, byte-wise.
pub fn sort_by_label(mut options: Vec<CheckoutOption>) -> Vec<CheckoutOption> {
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}
