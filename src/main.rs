//! cfgstack: resolve layered YAML configuration documents
//!
//! Thin command-line front end over the `cfgstack` library.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
