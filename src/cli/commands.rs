//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdcal")]
#[command(about = "Generate a year of linked markdown notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Year to generate (e.g., 2025); must be given together with DEBUG
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub year: Option<String>,

    /// Print diagnostics while generating (true or false)
    #[arg(value_name = "DEBUG")]
    pub debug: Option<String>,

    /// Directory in which the <YEAR>_Calendar folder is created
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory containing month.txt and day.txt
    #[arg(long, default_value = "templates")]
    pub templates_dir: PathBuf,
}
