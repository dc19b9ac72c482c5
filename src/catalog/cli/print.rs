use catalog::api::{CmdMessage, CmdResult, MessageLevel};
use catalog::model::Product;
use colored::Colorize;

const SEPARATOR: &str = "---";

pub(super) fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    for product in &result.products {
        println!("{}", render_product(product));
    }
    if let Some(payload) = &result.payload {
        println!("{}", render_payload(payload));
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// The five-line block shown for every product.
pub(super) fn render_product(product: &Product) -> String {
    format!(
        "ID: {}\nTitle: {}\nPrice: ${}\nCategory: {}\n{}",
        product.id, product.title, product.price, product.category, SEPARATOR
    )
}

pub(super) fn render_payload(payload: &serde_json::Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}
