//! # Catalog Architecture
//!
//! Catalog is a command-line client for a remote product-catalog REST API. Each
//! invocation maps `<METHOD> <resource> [params...]` onto exactly one HTTP call
//! and prints the result.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, reports the error line │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Routing + API Layer (route.rs, api.rs)                     │
//! │  - Normalizes method/resource casing                        │
//! │  - Picks the operation, dispatches to commands              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Local validation (ids, required fields, prices)          │
//! │  - At most one backend call, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backend Layer (client/)                                    │
//! │  - Abstract Catalog trait                                   │
//! │  - HttpCatalog (production), InMemoryCatalog (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Never Hits the Network
//!
//! A command that rejects its input (bad id, missing fields, unparseable price)
//! returns a `CmdResult` carrying a warning and never touches the backend.
//! Only remote failures become errors, and the CLI reports those as a single
//! line.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`route`]: Invocation parsing and the dispatch table
//! - [`commands`]: Validation and backend call for each operation
//! - [`client`]: Backend abstraction and implementations
//! - [`model`]: Core data types (`Product`, `ProductPatch`, `ProductId`)
//! - [`config`]: API base URL configuration
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod route;
