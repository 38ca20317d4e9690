//! CLI command definitions

use crate::domain::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "omata-validate")]
#[command(about = "Check an Omata diary export against its schema", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Export file to validate (default: default_file from config)
    #[arg(value_name = "JSON_FILE")]
    pub file: Option<PathBuf>,

    /// Reject keys the schema does not declare instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (default: .omata-validate.toml in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the JSON Schema used for validation and exit
    #[arg(long)]
    pub print_schema: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
