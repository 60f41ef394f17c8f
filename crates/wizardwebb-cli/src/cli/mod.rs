use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{ListArgs, ServeArgs};

#[derive(Debug, Parser)]
#[command(name = "wizardwebb")]
#[command(about = "Searchable directory of web tools", version)]
pub struct Cli {
    /// YAML catalog to load. Defaults to `$LINKS_FILE`, then `data/links.yml`.
    #[arg(long, global = true, value_name = "FILE")]
    pub links: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the directory over HTTP.
    Serve(ServeArgs),
    /// Print the entries visible for a search, category and toggle.
    List(ListArgs),
    /// Print the category chips in display order.
    Categories,
    /// Load the catalog and print a summary.
    Check,
}
