use crate::model::Product;

pub mod create;
pub mod delete;
pub mod get;
pub mod help;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a single command.
///
/// Messages are printed first, then products, then the raw payload.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub products: Vec<Product>,
    pub payload: Option<serde_json::Value>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// True when the command stopped at validation and nothing was fetched.
    pub fn is_rejected(&self) -> bool {
        self.products.is_empty()
            && self.payload.is_none()
            && self
                .messages
                .iter()
                .any(|m| m.level == MessageLevel::Warning)
    }
}
