use catalog::route::Invocation;
use clap::Parser;

/// Options go before the method. Everything from the method on is taken
/// verbatim, so a param such as `-v` or `-4` is a value, never a flag.
#[derive(Parser, Debug)]
#[command(name = "catalog", bin_name = "catalog", version)]
#[command(about = "Command-line client for a product catalog REST API", long_about = None)]
pub struct Cli {
    /// HTTP method (GET, POST, PUT or DELETE, any case), resource
    /// (products or products/<id>), then positional fields <title> <price> <category>
    #[arg(trailing_var_arg = true, value_name = "METHOD RESOURCE PARAMS")]
    pub command: Vec<String>,

    /// API base URL (overrides config file and CATALOG_API_URL)
    #[arg(long, value_name = "URL", help_heading = "Options")]
    pub api_url: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

impl Cli {
    pub fn method(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    pub fn resource(&self) -> &str {
        self.command.get(1).map(String::as_str).unwrap_or_default()
    }

    pub fn params(&self) -> &[String] {
        self.command.get(2..).unwrap_or_default()
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.method(), self.resource(), self.params().to_vec())
    }
}
