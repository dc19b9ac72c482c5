//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. **Argument Parsing**: clap turns argv into [`setup::Cli`]
//! 2. **Routing**: method/resource/params become an `Invocation`, then a `Route`
//! 3. **Context Setup**: config + `HttpCatalog` wired into `CatalogApi`. The
//!    backend checks its base URL on first use, so help and locally rejected
//!    commands run even with a broken config
//! 4. **Dispatch**: `CatalogApi::execute` runs the one operation
//! 5. **Output**: messages, product blocks and raw payloads go to stdout
//!
//! Errors bubble back to `main`, which prints the single error line.

mod logging;
mod print;
mod setup;

use catalog::api::CatalogApi;
use catalog::client::http::HttpCatalog;
use catalog::config::{API_URL_ENV, CatalogConfig};
use catalog::error::Result;
use clap::Parser;
use directories::ProjectDirs;
use print::print_result;
use setup::Cli;

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprint!("{}", e);
            return Ok(());
        }
    };
    logging::init(cli.verbose);

    let route = cli.invocation().route();
    tracing::debug!(?route, "resolved command");

    let mut api = init_api(&cli);
    let result = api.execute(route)?;
    print_result(&result);
    Ok(())
}

fn init_api(cli: &Cli) -> CatalogApi<HttpCatalog> {
    let config =
        load_config().with_overrides(std::env::var(API_URL_ENV).ok(), cli.api_url.clone());
    tracing::debug!(base_url = %config.base_url, "using catalog API");
    CatalogApi::new(HttpCatalog::new(config))
}

fn load_config() -> CatalogConfig {
    let Some(dirs) = ProjectDirs::from("com", "catalog", "catalog") else {
        return CatalogConfig::default();
    };
    CatalogConfig::load(dirs.config_dir()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        CatalogConfig::default()
    })
}
