use crate::client::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ProductFields, ProductPatch};

use super::helpers::{resolve_id, resolve_price};

pub const UPDATE_GUIDANCE: &str =
    "Provide at least one field to update: title, price or category";

pub fn run<C: Catalog>(catalog: &mut C, raw_id: &str, fields: ProductFields) -> Result<CmdResult> {
    let id = match resolve_id(raw_id) {
        Ok(id) => id,
        Err(rejected) => return Ok(rejected),
    };

    let price = match fields.price.as_deref().map(resolve_price).transpose() {
        Ok(price) => price,
        Err(rejected) => return Ok(rejected),
    };

    let patch = ProductPatch {
        title: fields.title,
        price,
        category: fields.category,
    };
    if patch.is_empty() {
        tracing::debug!(%id, "update rejected: no fields");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(UPDATE_GUIDANCE)));
    }

    let updated = catalog.update_product(id, &patch)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Product with ID {} updated:",
            id
        )))
        .with_products(vec![updated]))
}
