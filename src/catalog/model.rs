use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned product identifier. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Parses the id segment of a `products/<id>` resource.
    ///
    /// Returns `None` for anything that is not a decimal integer above zero.
    /// Only ASCII digits are accepted: no sign, no surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match raw.parse::<u64>() {
            Ok(n) if n > 0 => Some(Self(n)),
            _ => None,
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product as returned by the remote API.
///
/// The API sends more fields (description, image, rating); only the ones we
/// print are kept. Missing fields fall back to defaults so a sparse payload
/// still renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
}

/// Request body for `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub category: String,
}

/// Request body for `PUT /products/{id}`. Unset fields are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.price.is_none() && self.category.is_none()
    }
}

/// Positional params as typed on the command line: title, price, category.
///
/// Blank tokens count as not supplied, so `""` can hold a slot open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFields {
    pub title: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
}

impl ProductFields {
    pub fn from_params<S: AsRef<str>>(params: &[S]) -> Self {
        let slot = |i: usize| {
            params
                .get(i)
                .map(|s| s.as_ref())
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        Self {
            title: slot(0),
            price: slot(1),
            category: slot(2),
        }
    }
}

/// Parses a price token. Accepts finite, non-negative decimals only.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}
