use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sitesmith")]
#[command(about = "Generate site source artifacts from a declarative configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate artifacts and write them to an output directory
    Generate {
        /// Project configuration file (.toml or .json)
        #[arg(long)]
        config: PathBuf,

        /// Output directory for generated artifacts
        #[arg(long, default_value = "site")]
        out: PathBuf,

        /// Treat consistency violations as fatal
        #[arg(long)]
        strict: bool,
    },

    /// Generate in memory and print the consistency report
    Check {
        /// Project configuration file (.toml or .json)
        #[arg(long)]
        config: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
