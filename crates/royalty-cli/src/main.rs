mod commands;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "royalty",
    version,
    about = "Convert royalty statement PDFs into CSV line items"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a statement PDF into royalty line items
    Parse {
        /// Path to the statement PDF
        input_file: PathBuf,

        /// Output format: csv (default), table or json
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        output: OutputFormat,

        /// Write the records to a CSV file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        extraction: ExtractionArgs,
    },
    /// Show how each page is split into blocks and how tokens are classified
    Tokens {
        /// Path to the statement PDF
        input_file: PathBuf,

        /// Only show this page (1-based)
        #[arg(long)]
        page: Option<usize>,

        #[command(flatten)]
        extraction: ExtractionArgs,
    },
    /// Inspect and validate statement layouts
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },
}

#[derive(Subcommand)]
enum LayoutAction {
    /// Print the default layout as JSON
    Show,
    /// Describe the layout file fields
    Schema,
    /// Validate a layout file
    Validate {
        /// Path to JSON layout file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// poppler's pdftotext binary
    Pdftotext,
    /// Pure Rust extraction, no system dependencies
    PdfExtract,
}

/// Options shared by commands that read a statement.
#[derive(Args)]
pub struct ExtractionArgs {
    /// Text extraction backend
    #[arg(long, value_enum, default_value_t = Backend::Pdftotext)]
    backend: Backend,

    /// JSON layout file (flags below override its fields)
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Artist name attached to every record
    #[arg(long)]
    artist: Option<String>,

    /// Number of header tokens dropped from each page
    #[arg(long)]
    header_tokens: Option<usize>,

    /// Token that separates composition blocks
    #[arg(long)]
    sentinel: Option<String>,

    /// Fail on lines that match neither known layout
    #[arg(long)]
    strict: bool,
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            extraction,
        } => commands::parse::run(input_file, output, out, &extraction),
        Commands::Tokens {
            input_file,
            page,
            extraction,
        } => commands::tokens::run(input_file, page, &extraction),
        Commands::Layout { action } => match action {
            LayoutAction::Show => commands::layout::show(),
            LayoutAction::Schema => commands::layout::schema(),
            LayoutAction::Validate { file } => commands::layout::validate(&file),
        },
    };

    if let Err(e) = result {
        log::debug!("command failed: {e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
