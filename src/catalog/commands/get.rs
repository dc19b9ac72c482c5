use crate::client::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

use super::helpers::resolve_id;

pub fn run<C: Catalog>(catalog: &C, raw_id: &str) -> Result<CmdResult> {
    let id = match resolve_id(raw_id) {
        Ok(id) => id,
        Err(rejected) => return Ok(rejected),
    };

    let product = catalog.get_product(id)?;
    Ok(CmdResult::default().with_products(vec![product]))
}
