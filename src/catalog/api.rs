//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every catalog
//! operation enters here, whatever UI is driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** a resolved [`Route`] to the matching command
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no validation of its own (that lives in `commands/*.rs`) and never
//! writes to stdout or stderr.
//!
//! ## Generic Over Catalog
//!
//! `CatalogApi<C: Catalog>` is generic over the backend:
//! - Production: `CatalogApi<HttpCatalog>`
//! - Testing: `CatalogApi<InMemoryCatalog>`

use crate::client::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::ProductFields;
use crate::route::Route;

/// The main API facade for catalog operations.
pub struct CatalogApi<C: Catalog> {
    catalog: C,
}

impl<C: Catalog> CatalogApi<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn get_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.catalog, id)
    }

    pub fn create_product(&mut self, fields: ProductFields) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.catalog, fields)
    }

    pub fn update_product(
        &mut self,
        id: &str,
        fields: ProductFields,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.catalog, id, fields)
    }

    pub fn delete_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalog, id)
    }

    pub fn help(&self) -> commands::CmdResult {
        commands::help::run()
    }

    /// Run whichever operation the route names.
    pub fn execute(&mut self, route: Route) -> Result<commands::CmdResult> {
        match route {
            Route::List => self.list_products(),
            Route::Get { id } => self.get_product(&id),
            Route::Create { fields } => self.create_product(fields),
            Route::Update { id, fields } => self.update_product(&id, fields),
            Route::Delete { id } => self.delete_product(&id),
            Route::Help => Ok(self.help()),
        }
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
