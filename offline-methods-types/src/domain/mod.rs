//! Domain models for offline payment methods.

pub mod catalog;
pub mod exclusion;
pub mod option;
pub mod pipeline;
pub mod policy;
pub mod store;

pub use catalog::{
    CatalogResponse, MethodKind, PaymentMethod, PaymentPlace, RawPaymentMethod, RawPaymentPlace,
};
pub use exclusion::ExclusionList;
pub use option::CheckoutOption;
pub use pipeline::{PaymentMethodFilterPipeline, filter_excluded, sort_by_label};
pub use policy::FilterPolicy;
pub use store::StoreId;
