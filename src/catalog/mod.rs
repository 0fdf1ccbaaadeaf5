//! Remote product catalog: data model, read seam and HTTP implementation.

mod client;
mod error;
mod types;

pub use client::{parse_product, HttpCatalog, ProductSource};
pub use error::{FetchError, FetchErrorKind};
pub use types::{Product, ProductId, Rating};
