//! Resolve command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::utils::LoaderArgs;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Quoted block-style YAML in document order
    #[default]
    Canonical,
    /// Key-sorted, indented dump
    Pretty,
    /// JSON in document order
    Json,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Document identifier (file name, extension optional)
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Canonical)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub loader: LoaderArgs,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let stack = args.loader.resolve(&args.identifier)?;

    match args.format {
        OutputFormat::Canonical => print!("{}", stack.to_canonical_yaml()),
        OutputFormat::Pretty => println!("{}", stack),
        OutputFormat::Json => println!("{}", stack.to_json()?),
    }
    Ok(())
}
