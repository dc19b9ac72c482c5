use super::Catalog;
use crate::error::{CatalogError, Result};
use crate::model::{NewProduct, Product, ProductId, ProductPatch};
use std::cell::RefCell;

/// A call received by [`InMemoryCatalog`], with the JSON body if one was sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    Get(u64),
    Create(serde_json::Value),
    Update(u64, serde_json::Value),
    Delete(u64),
}

/// In-memory catalog for testing.
/// Does NOT talk to the network; keeps products in insertion order.
#[derive(Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    requests: RefCell<Vec<Request>>,
    failure: Option<String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Every call fails with the given message, like an unreachable server.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn record(&self, request: Request) -> Result<()> {
        self.requests.borrow_mut().push(request);
        match &self.failure {
            Some(message) => Err(CatalogError::Api(message.clone())),
            None => Ok(()),
        }
    }

    fn position(&self, id: ProductId) -> Result<usize> {
        self.products
            .iter()
            .position(|p| p.id == id.get())
            .ok_or_else(|| CatalogError::Api(format!("Product {} not found", id)))
    }
}

impl Catalog for InMemoryCatalog {
    fn list_products(&self) -> Result<Vec<Product>> {
        self.record(Request::List)?;
        Ok(self.products.clone())
    }

    fn get_product(&self, id: ProductId) -> Result<Product> {
        self.record(Request::Get(id.get()))?;
        let idx = self.position(id)?;
        Ok(self.products[idx].clone())
    }

    fn create_product(&mut self, product: &NewProduct) -> Result<Product> {
        self.record(Request::Create(serde_json::to_value(product)?))?;
        let next_id = self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = Product {
            id: next_id,
            title: product.title.clone(),
            price: product.price,
            category: product.category.clone(),
        };
        self.products.push(created.clone());
        Ok(created)
    }

    fn update_product(&mut self, id: ProductId, patch: &ProductPatch) -> Result<Product> {
        self.record(Request::Update(id.get(), serde_json::to_value(patch)?))?;
        let idx = self.position(id)?;
        let product = &mut self.products[idx];
        if let Some(title) = &patch.title {
            product.title = title.clone();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = &patch.category {
            product.category = category.clone();
        }
        Ok(product.clone())
    }

    fn delete_product(&mut self, id: ProductId) -> Result<serde_json::Value> {
        self.record(Request::Delete(id.get()))?;
        let idx = self.position(id)?;
        let removed = self.products.remove(idx);
        Ok(serde_json::to_value(removed)?)
    }
}

// --- Test Fixtures ---
