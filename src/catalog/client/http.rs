use super::Catalog;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::model::{NewProduct, Product, ProductId, ProductPatch};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::cell::OnceCell;

const PRODUCTS_PATH: &str = "/products";

/// Catalog backed by the remote REST API.
///
/// Construction never fails. The base URL is checked and the HTTP client is
/// built on the first request, so commands rejected locally never touch them.
pub struct HttpCatalog {
    config: CatalogConfig,
    client: OnceCell<Client>,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    pub fn base_url(&self) -> Result<&str> {
        self.config.base_url()
    }

    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .user_agent(concat!("catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(self.client.get_or_init(|| client))
    }

    fn collection_url(&self) -> Result<String> {
        Ok(format!("{}{}", self.base_url()?, PRODUCTS_PATH))
    }

    fn item_url(&self, id: ProductId) -> Result<String> {
        Ok(format!("{}{}/{}", self.base_url()?, PRODUCTS_PATH, id))
    }

    /// Sends the request and decodes the JSON body.
    ///
    /// Any non-2xx status is reported as an error without looking at the body.
    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request.send().inspect_err(|e| {
            tracing::debug!(error = %e, "request failed");
        })?;
        let status = resp.status();
        tracing::debug!(%status, url = %resp.url(), "response received");

        let resp = resp.error_for_status()?;
        Ok(resp.json()?)
    }
}

impl Catalog for HttpCatalog {
    fn list_products(&self) -> Result<Vec<Product>> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "GET");
        self.send(self.client()?.get(&url))
    }

    fn get_product(&self, id: ProductId) -> Result<Product> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "GET");
        self.send(self.client()?.get(&url))
    }

    fn create_product(&mut self, product: &NewProduct) -> Result<Product> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "POST");
        self.send(self.client()?.post(&url).json(product))
    }

    fn update_product(&mut self, id: ProductId, patch: &ProductPatch) -> Result<Product> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "PUT");
        self.send(self.client()?.put(&url).json(patch))
    }

    fn delete_product(&mut self, id: ProductId) -> Result<serde_json::Value> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "DELETE");
        self.send(self.client()?.delete(&url))
    }
}
