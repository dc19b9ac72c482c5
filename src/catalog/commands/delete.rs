use crate::client::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::resolve_id;

pub fn run<C: Catalog>(catalog: &mut C, raw_id: &str) -> Result<CmdResult> {
    let id = match resolve_id(raw_id) {
        Ok(id) => id,
        Err(rejected) => return Ok(rejected),
    };

    let payload = catalog.delete_product(id)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Product with ID {} deleted:",
            id
        )))
        .with_payload(payload))
}
