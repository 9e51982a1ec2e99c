//! Print the OpenAPI document as JSON or YAML.

use std::io::Write;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use user_service::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(about = "Print the user service OpenAPI document")]
struct Args {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let rendered = match args.format {
        Format::Json => doc.to_pretty_json().wrap_err("serialise OpenAPI as JSON")?,
        Format::Yaml => doc.to_yaml().wrap_err("serialise OpenAPI as YAML")?,
    };
    writeln!(std::io::stdout().lock(), "{rendered}").wrap_err("write OpenAPI document")?;
    Ok(())
}
