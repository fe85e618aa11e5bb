use clap::{Parser, Subcommand, ValueEnum};
use docrecords::model::FileKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docrecords", version)]
#[command(about = "Manage converted documents and their HTML/JSONL renderings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load converted documents from a directory and list them
    #[command(alias = "i")]
    Import {
        /// Directory holding source files with their .html/.jsonl renderings
        dir: PathBuf,

        /// Only list records of this kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Listing page (1-based, page size from config)
        #[arg(short, long)]
        page: Option<usize>,

        /// Print records as JSON instead of a listing
        #[arg(long)]
        json: bool,

        /// Write the JSONL of every loaded record to this file
        #[arg(long)]
        export_jsonl: Option<PathBuf>,

        /// Write a .tar.gz with one JSONL file per loaded record
        #[arg(long)]
        export_archive: Option<PathBuf>,
    },

    /// Merge two or more JSONL files
    #[command(alias = "m")]
    Merge {
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,

        /// Output file (defaults to the configured merged file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, export-ext, fallback-export-name, merged-file-name)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Spreadsheet,
    Document,
    Json,
    Other,
}

impl From<KindArg> for FileKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Spreadsheet => FileKind::Spreadsheet,
            KindArg::Document => FileKind::Document,
            KindArg::Json => FileKind::Json,
            KindArg::Other => FileKind::Other,
        }
    }
}
