use crate::client::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewProduct, ProductFields};

use super::helpers::resolve_price;

pub const CREATE_USAGE: &str = "Missing parameters. Usage: POST products <title> <price> <category>";

pub fn run<C: Catalog>(catalog: &mut C, fields: ProductFields) -> Result<CmdResult> {
    let (Some(title), Some(price), Some(category)) = (fields.title, fields.price, fields.category)
    else {
        tracing::debug!("create rejected: missing fields");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(CREATE_USAGE)));
    };

    let price = match resolve_price(&price) {
        Ok(price) => price,
        Err(rejected) => return Ok(rejected),
    };

    let product = NewProduct {
        title,
        price,
        category,
    };
    let created = catalog.create_product(&product)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Product created:"))
        .with_products(vec![created]))
}
