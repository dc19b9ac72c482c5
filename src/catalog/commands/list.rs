use crate::client::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run<C: Catalog>(catalog: &C) -> Result<CmdResult> {
    let products = catalog.list_products()?;
    Ok(CmdResult::default().with_products(products))
}
