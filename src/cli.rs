// src/cli.rs
use clap::Parser;

#[derive(Parser)]
#[command(name = "hexdump2c", version = "1.0", about = "Hex dump to C array converter")]
pub struct Cli {
    /// Input dump files, concatenated in order; reads stdin when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Write the generated fragment to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Identifier for the generated array
    #[arg(long, default_value = "data")]
    pub name: String,

    /// Reject tokens that are not exactly two hex digits
    #[arg(long)]
    pub strict: bool,

    /// Write a conversion report to a file
    #[arg(long, value_name = "PATH")]
    pub report: Option<String>,

    /// Render the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Highlight the fragment when printing to a terminal
    #[arg(long)]
    pub color: bool,
}
