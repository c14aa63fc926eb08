//! matriz - Matrix Operations CLI
//!
//! Usage:
//!   matriz serve                      # Serve /qr, /rotate, /health over HTTP
//!   matriz qr matrix.json             # QR-factorize a matrix from a file
//!   matriz qr matrix.json --analyze   # ...and report Q/R properties
//!   matriz rotate matrix.json         # Rotate 90 degrees clockwise
//!   matriz rotate matrix.json --direction left

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;

use commands::{qr, rotate, serve};

/// matriz - matrix operations tool
///
/// Validate, rotate, and QR-factorize matrices, standalone or as an HTTP
/// service.
#[derive(Parser)]
#[command(name = "matriz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve matrix operations over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 3001)]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable permissive CORS headers
        #[arg(long)]
        no_cors: bool,

        /// Log each handled request
        #[arg(short, long)]
        verbose: bool,
    },

    /// QR-factorize a matrix read from a JSON file (array of rows)
    Qr {
        /// Path to the JSON matrix file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Also report orthogonality / triangularity properties
        #[arg(long)]
        analyze: bool,
    },

    /// Rotate a matrix read from a JSON file by 90 degrees
    Rotate {
        /// Path to the JSON matrix file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Rotation direction ("left" or "right")
        #[arg(long, default_value = "right")]
        direction: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            host,
            no_cors,
            verbose,
        } => serve::run(&serve::ServerConfig {
            port,
            host,
            cors: !no_cors,
            verbose,
        }),
        Commands::Qr { file, analyze } => qr::run(&file, analyze),
        Commands::Rotate { file, direction } => rotate::run(&file, &direction),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {e}").red());
            e.exit_code()
        }
    }
}
