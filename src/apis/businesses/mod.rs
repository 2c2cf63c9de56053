//! APIs and models related to business records.

mod api;
mod model;

pub use api::BusinessesApi;
pub use model::*;
