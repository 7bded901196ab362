//! # Etiqueta CLI
//!
//! Command-line interface for EPL2 label printing.
//!
//! ## Usage
//!
//! ```bash
//! # Show the EPL2 a job produces
//! etiqueta render label.json
//!
//! # Write it to a file, three copies
//! etiqueta render label.json --quantity 3 --output label.epl
//!
//! # Print through `lpr -P tagprinter -o raw`
//! etiqueta print label.json
//!
//! # Another queue, 4" × 6" stock
//! etiqueta print label.json --printer zebra --height 6
//!
//! # Page and barcode defaults from a shared options file
//! etiqueta render label.json --options zebra-2844.json
//!
//! # List barcode symbologies
//! etiqueta symbologies
//! ```
//!
//! A job path of `-` reads the job from stdin.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use etiqueta::{
    EtiquetaError, LabelOptions,
    json_api::JsonJob,
    protocol::barcode::Symbology,
    transport::{DEFAULT_DESTINATION, LprSpooler, lpr::DEFAULT_PROGRAM},
};

/// Etiqueta - EPL2 label printer utility
#[derive(Parser, Debug)]
#[command(name = "etiqueta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON job to EPL2
    Render {
        /// Job file (`-` for stdin)
        job: PathBuf,

        /// Write to FILE instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Copies to print (overrides the job)
        #[arg(long)]
        quantity: Option<u32>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Send a JSON job to a print queue
    Print {
        /// Job file (`-` for stdin)
        job: PathBuf,

        /// Print queue name
        #[arg(long, default_value = DEFAULT_DESTINATION)]
        printer: String,

        /// Copies to print (overrides the job)
        #[arg(long)]
        quantity: Option<u32>,

        /// Print command to run
        #[arg(long, default_value = DEFAULT_PROGRAM)]
        lpr: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List barcode symbologies and their pattern codes
    Symbologies,
}

/// Page overrides applied on top of the job's options
#[derive(Args, Debug)]
struct PageArgs {
    /// Label options file, replacing the job's `options` block
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Page width in inches
    #[arg(long)]
    width: Option<f64>,

    /// Page height in inches
    #[arg(long)]
    height: Option<f64>,

    /// Printer resolution
    #[arg(long)]
    dpi: Option<u32>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), EtiquetaError> {
    match cli.command {
        Commands::Render {
            job,
            output,
            quantity,
            page,
        } => {
            let job = load_job(&job, quantity, &page)?;
            let data = job.render()?;

            match output {
                Some(path) => {
                    fs::write(&path, &data)?;
                    println!("Wrote {}", path.display());
                }
                None => io::stdout().write_all(data.as_bytes())?,
            }
        }

        Commands::Print {
            job,
            printer,
            quantity,
            lpr,
            page,
        } => {
            let job = load_job(&job, quantity, &page)?;
            let label = job.to_label()?;
            info!(commands = label.commands().len(), "label composed");

            label.print_to(&LprSpooler::with_program(lpr), &printer, job.quantity)?;
            let noun = if job.quantity == 1 { "copy" } else { "copies" };
            println!("Sent {} {} to {}", job.quantity, noun, printer);
        }

        Commands::Symbologies => {
            println!("Available symbologies:");
            for s in Symbology::all() {
                println!("  {:<34} {}", s.name(), s.code());
            }
        }
    }

    Ok(())
}

/// Read a job from `path` (or stdin) and apply command-line overrides.
fn load_job(path: &Path, quantity: Option<u32>, page: &PageArgs) -> Result<JsonJob, EtiquetaError> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    let mut job = JsonJob::from_json_str(&json)?;
    if let Some(options) = &page.options {
        job.options = LabelOptions::from_path(options)?;
    }
    if let Some(q) = quantity {
        job.quantity = q;
    }
    if page.width.is_some() {
        job.options.width = page.width;
    }
    if page.height.is_some() {
        job.options.height = page.height;
    }
    if page.dpi.is_some() {
        job.options.dpi = page.dpi;
    }
    Ok(job)
}
