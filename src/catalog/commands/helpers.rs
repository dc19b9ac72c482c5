use crate::commands::{CmdMessage, CmdResult};
use crate::model::{ProductId, parse_price};

pub const INVALID_ID: &str = "Invalid ID";

/// Resolves the raw id text, or a rejected result carrying the "Invalid ID" warning.
pub fn resolve_id(raw: &str) -> Result<ProductId, CmdResult> {
    ProductId::parse(raw).ok_or_else(|| {
        tracing::debug!(raw, "rejected product id");
        CmdResult::default().with_message(CmdMessage::warning(INVALID_ID))
    })
}

/// Resolves a price token, rejecting anything that is not a valid price.
pub fn resolve_price(text: &str) -> Result<f64, CmdResult> {
    parse_price(text).ok_or_else(|| {
        tracing::debug!(text, "rejected price");
        CmdResult::default().with_message(CmdMessage::warning(format!("Invalid price: {}", text)))
    })
}
