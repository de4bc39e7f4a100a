//! `toontab` CLI — convert files between JSON and tabular TOON.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to TOON (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | toontab encode
//!
//! # Encode from file to file
//! toontab encode -i data.json -o data.toon
//!
//! # Compact output, custom indent
//! toontab encode --compact -i data.json
//! toontab encode --indent 4 -i data.json
//!
//! # Decode TOON back to pretty-printed JSON
//! toontab decode -i data.toon
//!
//! # Timings and size statistics for one document
//! toontab stats -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::time::Instant;
use toontab_core::FormatConfig;

#[derive(Parser)]
#[command(name = "toontab", version, about = "Tabular TOON encoder/decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON document to TOON
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Collapse indentation and inter-item spacing
        #[arg(long)]
        compact: bool,
        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Decode TOON back to pretty-printed JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Encode and decode one JSON document, reporting timings and sizes
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Encode {
            input,
            output,
            compact,
            indent,
        } => {
            let json = read_input(input.as_deref())?;
            let config = FormatConfig::default()
                .with_indent_width(indent)
                .with_compact(compact);
            let toon = toontab_core::encode_json(&json, &config)
                .context("Failed to encode JSON to TOON")?;
            write_output(output.as_deref(), &toon)?;
        }
        Commands::Decode { input, output } => {
            let toon = read_input(input.as_deref())?;
            let value = toontab_core::decode(&toon).context("Failed to decode TOON")?;
            let pretty = serde_json::to_string_pretty(&value)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Stats { input } => {
            let json = read_input(input.as_deref())?;
            let config = FormatConfig::default();

            let encode_start = Instant::now();
            let toon = toontab_core::encode_json(&json, &config)
                .context("Failed to encode JSON to TOON")?;
            let encode_ms = encode_start.elapsed().as_secs_f64() * 1000.0;

            let decode_start = Instant::now();
            toontab_core::decode(&toon).context("Failed to decode the encoded TOON")?;
            let decode_ms = decode_start.elapsed().as_secs_f64() * 1000.0;

            let reduction = if json.is_empty() {
                0.0
            } else {
                (1.0 - (toon.len() as f64 / json.len() as f64)) * 100.0
            };
            println!("JSON size:  {} bytes", json.len());
            println!("TOON size:  {} bytes", toon.len());
            println!("Reduction:  {:.1}%", reduction);
            println!("Encode:     {:.2} ms", encode_ms);
            println!("Decode:     {:.2} ms", decode_ms);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
