use crate::commands::{CmdMessage, CmdResult};

pub const UNRECOGNIZED: &str = "Unrecognized command. Usage:";

/// One line per supported command shape.
pub const USAGE_LINES: [&str; 5] = [
    "GET products",
    "GET products/<productId>",
    "POST products <title> <price> <category>",
    "PUT products/<productId> <title> <price> <category>",
    "DELETE products/<productId>",
];

pub fn run() -> CmdResult {
    let mut result = CmdResult::default().with_message(CmdMessage::warning(UNRECOGNIZED));
    for line in USAGE_LINES {
        result.add_message(CmdMessage::info(line));
    }
    result
}
