//! # Command Routing
//!
//! Maps `<METHOD> <resource> [params...]` onto one of the supported operations.
//!
//! Inputs are case-normalized once, when the [`Invocation`] is built: the method
//! to uppercase, the resource to lowercase. Params are kept verbatim.
//!
//! Rules are tried in order and the first match wins:
//!
//! ```text
//! GET     products        -> Route::List
//! GET     products/<id>   -> Route::Get
//! POST    products        -> Route::Create   (title, price, category)
//! PUT     products/<id>   -> Route::Update   (title, price, category)
//! DELETE  products/<id>   -> Route::Delete
//! anything else           -> Route::Help
//! ```
//!
//! The `<id>` text is carried through unvalidated; each operation rejects bad
//! ids itself so the "Invalid ID" message comes from one place.

use crate::model::ProductFields;

const COLLECTION: &str = "products";
const ITEM_PREFIX: &str = "products/";

/// Parsed command line. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Invocation {
    pub method: String,
    pub resource: String,
    pub params: Vec<String>,
}

impl Invocation {
    pub fn new(method: &str, resource: &str, params: Vec<String>) -> Self {
        Self {
            method: method.to_uppercase(),
            resource: resource.to_lowercase(),
            params,
        }
    }

    /// Resolve which operation this invocation asks for.
    pub fn route(&self) -> Route {
        let item_id = self
            .resource
            .strip_prefix(ITEM_PREFIX)
            .map(str::to_string);
        let is_collection = self.resource == COLLECTION;

        match (self.method.as_str(), item_id) {
            ("GET", _) if is_collection => Route::List,
            ("GET", Some(id)) => Route::Get { id },
            ("POST", _) if is_collection => Route::Create {
                fields: ProductFields::from_params(self.params.as_slice()),
            },
            ("PUT", Some(id)) => Route::Update {
                id,
                fields: ProductFields::from_params(self.params.as_slice()),
            },
            ("DELETE", Some(id)) => Route::Delete { id },
            _ => Route::Help,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    List,
    Get { id: String },
    Create { fields: ProductFields },
    Update { id: String, fields: ProductFields },
    Delete { id: String },
    Help,
}
