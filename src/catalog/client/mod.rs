//! # Backend Layer
//!
//! The [`Catalog`] trait is the seam between the command layer and the remote
//! product API. Commands only ever talk to a `Catalog`, never to HTTP directly.
//!
//! ## Implementations
//!
//! - [`http::HttpCatalog`]: Production backend, one blocking `reqwest` call per
//!   method against the configured base URL.
//!
//! - [`memory::InMemoryCatalog`]: In-memory backend for testing
//!   - Records every call it receives
//!   - Lets tests assert that validation failures issue zero requests
//!
//! ## Remote Contract
//!
//! ```text
//! GET    /products        -> [Product]
//! GET    /products/{id}   -> Product
//! POST   /products        -> Product      (body: NewProduct)
//! PUT    /products/{id}   -> Product      (body: ProductPatch)
//! DELETE /products/{id}   -> JSON payload (printed raw)
//! ```
//!
//! Every method is a single best-effort call: no retries, no timeouts.

use crate::error::Result;
use crate::model::{NewProduct, Product, ProductId, ProductPatch};

pub mod http;
pub mod memory;

/// Abstract interface to a product catalog.
pub trait Catalog {
    /// Fetch the full collection, in server order
    fn list_products(&self) -> Result<Vec<Product>>;

    /// Fetch a single product
    fn get_product(&self, id: ProductId) -> Result<Product>;

    /// Create a product and return the server's record
    fn create_product(&mut self, product: &NewProduct) -> Result<Product>;

    /// Apply a partial update and return the server's record
    fn update_product(&mut self, id: ProductId, patch: &ProductPatch) -> Result<Product>;

    /// Remove a product. Returns whatever payload the server sends back.
    fn delete_product(&mut self, id: ProductId) -> Result<serde_json::Value>;
}
