pub mod catalog_store;
pub mod dashboard;
pub mod edit_session;
pub mod error;
pub mod remote;
pub mod visibility;

pub use catalog_store::CatalogStore;
pub use dashboard::{Dashboard, DashboardEvent, DashboardSnapshot, ErrorSink, TracingErrorSink};
pub use edit_session::EditSession;
pub use error::{CatalogError, CatalogOperation};
pub use remote::{normalize_base_url, CatalogResult, FoodsApi, HttpFoodsApi};
pub use visibility::ModalVisibility;

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod dashboard_tests;

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod http_tests;
