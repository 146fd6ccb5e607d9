//! Stockroom Core - Catalog Data Types
//!
//! Pure data structures shared by the store and API crates. This crate
//! contains the `Product` record, the fixed-scale `Price` type, and the
//! catalog error taxonomy - no business logic.

mod entities;
mod error;

pub use entities::{Price, PriceError, Product, ProductDraft, ProductId};
pub use error::{CatalogError, CatalogResult};
