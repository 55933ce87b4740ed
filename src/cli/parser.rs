use crate::export::ExportFormat;
use crate::models::{HeaderDesign, ListType};
use clap::{Parser, Subcommand};

/// Command-line interface definition for pattiyal
/// CLI application to generate printable Tamil shopping list documents
#[derive(Parser)]
#[command(
    name = "pattiyal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate print-ready Tamil grocery/vegetable shopping list documents for catering events",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and a starter config file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing fields")]
        check: bool,
    },

    /// Show a list from an event file as a terminal table
    Preview {
        /// Event file (JSON or YAML)
        file: String,

        /// Which list to show
        #[arg(long = "type", value_enum, default_value = "grocery")]
        list_type: ListType,
    },

    /// Export a list as a print-ready HTML document, CSV or JSON
    Export {
        /// Event file (JSON or YAML)
        file: String,

        /// Which list to export
        #[arg(long = "type", value_enum, default_value = "grocery")]
        list_type: ListType,

        #[arg(long, value_enum, default_value = "html")]
        format: ExportFormat,

        /// Output file (default: <title>_<list>_<YYYYMMDD>.<ext> in the current directory)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Header design override (default | custom)
        #[arg(long, value_enum)]
        design: Option<HeaderDesign>,

        /// Custom header image URL (implies --design custom when set in config)
        #[arg(long = "design-url", value_name = "URL")]
        design_url: Option<String>,

        /// Footer text override (max 180 characters)
        #[arg(long)]
        footer: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
