//! Get command implementation

use anyhow::Result;
use cfgstack::render::render_value_yaml;
use cfgstack::{ConfigValue, Scalar};
use clap::Args;

use super::utils::LoaderArgs;

#[derive(Args)]
pub struct GetArgs {
    /// Document identifier (file name, extension optional)
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Dotted key path, e.g. server.port
    #[arg(value_name = "KEY_PATH")]
    pub key_path: String,

    #[command(flatten)]
    pub loader: LoaderArgs,
}

pub fn run(args: GetArgs) -> Result<()> {
    let stack = args.loader.resolve(&args.identifier)?;

    let Some(value) = stack.lookup(&args.key_path) else {
        anyhow::bail!("Key not found: {}", args.key_path);
    };

    match value {
        ConfigValue::Scalar(scalar) => println!("{}", plain_scalar(scalar)),
        other => print!("{}", render_value_yaml(other)),
    }
    Ok(())
}

fn plain_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::String(s) => s.clone(),
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Null => "null".to_string(),
    }
}
