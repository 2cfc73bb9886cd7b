mod commands;
mod logging;
mod render;

use std::path::{Path, PathBuf};
use std::process;

use atlas_client::{ClientConfig, CountrySource, HttpCountrySource, StaticCountrySource};
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Search restcountries data and validate country JSON.
#[derive(Parser)]
#[command(
    name = "atlas",
    version,
    about = "Search restcountries data and validate country JSON"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Client configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Answer searches from a local JSON data set instead of the API
    #[arg(long, global = true)]
    offline: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search countries by capital city
    Capital {
        /// Full or partial capital name
        term: String,
    },

    /// Search countries by name
    Name {
        /// Full or partial country name
        term: String,
        /// Show the short suggestion list instead of full results
        #[arg(long)]
        suggest: bool,
    },

    /// Show one country by alpha-2 or alpha-3 code
    Code {
        /// Alpha-2 or alpha-3 country code
        code: String,
    },

    /// Validate a JSON array of countries and print its canonical form
    Decode {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Re-encode a JSON array of countries as pretty JSON
    Encode {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Print the JSON Schema for country data
    Schema {
        /// Only this registered type (e.g. Country, Currency)
        type_name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let ctx = Context {
        output: cli.output,
        quiet: cli.quiet,
        config: cli.config,
        offline: cli.offline,
    };

    match cli.command {
        Commands::Capital { term } => commands::search::cmd_capital(&ctx, &term),
        Commands::Name { term, suggest } => commands::search::cmd_name(&ctx, &term, suggest),
        Commands::Code { code } => commands::search::cmd_code(&ctx, &code),
        Commands::Decode { file } => commands::convert::cmd_decode(&file, ctx.output, ctx.quiet),
        Commands::Encode { file } => commands::convert::cmd_encode(&file, ctx.output, ctx.quiet),
        Commands::Schema { type_name } => {
            commands::schema::cmd_schema(type_name.as_deref(), ctx.output, ctx.quiet)
        }
    }
}

/// Global options every search command needs.
pub(crate) struct Context {
    pub output: OutputFormat,
    pub quiet: bool,
    pub config: Option<PathBuf>,
    pub offline: Option<PathBuf>,
}

impl Context {
    /// Load the client configuration or exit.
    pub(crate) fn client_config(&self) -> ClientConfig {
        match ClientConfig::load(self.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                report_error(&format!("error: {}", e), self.output, self.quiet);
                process::exit(1);
            }
        }
    }

    /// The offline data set if one was given, otherwise the HTTP API.
    pub(crate) fn country_source(&self, config: &ClientConfig) -> Box<dyn CountrySource> {
        match &self.offline {
            Some(path) => {
                let raw = read_file(path, self.output, self.quiet);
                match StaticCountrySource::from_json(&raw) {
                    Ok(source) => {
                        tracing::debug!(
                            path = %path.display(),
                            count = source.countries().len(),
                            "using offline data set"
                        );
                        Box::new(source)
                    }
                    Err(e) => {
                        let msg = format!("error: invalid data set '{}': {}", path.display(), e);
                        report_error(&msg, self.output, self.quiet);
                        process::exit(1);
                    }
                }
            }
            None => {
                tracing::debug!(base_url = %config.base_url, "using country API");
                Box::new(HttpCountrySource::new(config))
            }
        }
    }
}

/// Read a whole file or exit with a message naming it.
pub(crate) fn read_file(path: &Path, output: OutputFormat, quiet: bool) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
