//! Organization record hashing CLI.
//!
//! This binary provides a command-line interface for the org_hasher library:
//! it normalizes an input CSV and writes a digested copy, or previews the
//! canonical (pre-digest) values for debugging.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use org_hasher::{
    logging, table, PipelineConfig, PipelineService, Sha256Digest, TableOptions,
};

/// Organization Record Hasher
///
/// Normalize organization names, addresses and phone numbers, then replace
/// identifying columns with SHA-256 digests.
#[derive(Parser)]
#[command(name = "org-hasher")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input CSV file path
    #[arg(short, long, value_name = "FILE", default_value = "input.csv")]
    input: PathBuf,

    /// Output CSV file path
    #[arg(short, long, value_name = "FILE", default_value = "output-hashed.csv")]
    output: PathBuf,

    /// Trailing phone digits kept before hashing
    #[arg(long, value_name = "N", default_value_t = 9, global = true)]
    phone_digits: usize,

    /// Characters in the name prefix/suffix fingerprints
    #[arg(long, value_name = "N", default_value_t = 5, global = true)]
    fingerprint_len: usize,

    /// Keep cells such as "NA" or "NULL" as text instead of treating them as missing
    #[arg(long, global = true)]
    keep_na_markers: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print canonical values without hashing (for debugging rules)
    Preview {
        /// Input CSV file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output CSV file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Command handler holding the shared configuration.
struct HashingHandler {
    config: PipelineConfig,
    options: TableOptions,
    verbose: bool,
}

impl HashingHandler {
    fn new(cli: &Cli) -> Self {
        Self {
            config: PipelineConfig::default()
                .with_phone_digits(cli.phone_digits)
                .with_fingerprint_len(cli.fingerprint_len),
            options: TableOptions::default().with_keep_na_markers(cli.keep_na_markers),
            verbose: cli.verbose,
        }
    }

    fn service(&self, digest: bool) -> PipelineService {
        PipelineService::new(
            Box::new(Sha256Digest::new()),
            self.config.with_digest(digest),
        )
    }

    /// Normalizes and digests `input` into `output`.
    fn hash(&self, input: &Path, output: &Path) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let report = self
            .service(true)
            .run(input, output, &self.options)
            .with_context(|| "Hashing failed")?;

        if self.verbose {
            println!("Input:  {}", input.display());
            println!("Output: {}", output.display());
            println!("\nHashing Summary:");
            println!("  Records processed: {}", report.records_processed);
            println!("  Fields digested:   {}", report.fields_digested);
            println!("  Empty after normalization: {}", report.empty_after_normalization);
        }

        if report.has_records() {
            println!(
                "✓ Data processing complete! {} record(s) → {}",
                report.records_processed,
                output.display()
            );
        } else {
            println!("⚠ Input has no records; wrote header only → {}", output.display());
        }

        Ok(())
    }

    /// Writes canonical values without the digest stage.
    fn preview(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
        self.config.validate().with_context(|| "Invalid configuration")?;

        let set = table::read_records(input, &self.options)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        let (set, report) = self.service(false).process(set);

        if let Some(output_path) = output {
            table::write_records(output_path, &set)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Previewed {} record(s) → {}",
                report.records_processed,
                output_path.display()
            );
        } else {
            table::write_records_to(std::io::stdout().lock(), &set)
                .with_context(|| "Failed to write to stdout")?;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let handler = HashingHandler::new(&cli);

    match &cli.command {
        Some(Commands::Preview { input, output }) => {
            handler.preview(input, output.as_deref())?;
        }
        None => {
            handler.hash(&cli.input, &cli.output)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arguments() {
        let cli = Cli::parse_from(["org-hasher"]);
        assert_eq!(cli.input, PathBuf::from("input.csv"));
        assert_eq!(cli.output, PathBuf::from("output-hashed.csv"));
        assert_eq!(cli.phone_digits, 9);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_handler_config_from_flags() {
        let cli = Cli::parse_from([
            "org-hasher",
            "--phone-digits",
            "7",
            "--fingerprint-len",
            "3",
            "--keep-na-markers",
        ]);
        let handler = HashingHandler::new(&cli);
        assert_eq!(handler.config.phone_digits, 7);
        assert_eq!(handler.config.fingerprint_len, 3);
        assert!(handler.options.keep_na_markers);
        assert!(!handler.service(false).config().digest);
    }

    #[test]
    fn test_preview_subcommand() {
        let cli = Cli::parse_from(["org-hasher", "preview", "--input", "data.csv"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Preview { ref input, output: None }) if input == Path::new("data.csv")
        ));
    }
}
