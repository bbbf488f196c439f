//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use dnaxplorer::analysis::{
    composition_stats, generate_csv_file, CompositionStats, DnaError, GeneratorParams,
    ProcessParams, Result, Sequence, SequenceTable, ThreadCount, DEFAULT_SEQUENCE_COLUMN,
};

#[derive(Parser, Debug)]
#[command(name = "dnaxplorer")]
#[command(version, about = "Explore DNA sequences: reverse, complement and composition statistics")]
#[command(
    long_about = "Annotate CSV tables of DNA sequences and report composition statistics.

Examples:
  dnaxplorer generate -o data/bulk.csv --count 100
  dnaxplorer process -i data/bulk.csv -o data/annotated.csv
  dnaxplorer stats -i data/bulk.csv --row 3
  dnaxplorer stats --sequence ATGCGC --format json"
)]
pub struct Cli {
    /// Log filter (e.g. info, debug, dnaxplorer=trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add Reverse, Complement and Reverse_Complement columns to a CSV
    Process {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Column holding the sequences [default: DNA_Sequence]
        #[arg(long)]
        column: Option<String>,

        /// Worker threads (default: all cores)
        #[arg(long)]
        threads: Option<usize>,

        /// JSON file with processing parameters
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print composition statistics for one sequence
    Stats {
        /// Input CSV file
        #[arg(short, long, required_unless_present = "sequence", conflicts_with = "sequence")]
        input: Option<PathBuf>,

        /// Zero-based row index within the input file
        #[arg(long, default_value_t = 0, conflicts_with = "sequence")]
        row: usize,

        /// Column holding the sequences
        #[arg(long, default_value = DEFAULT_SEQUENCE_COLUMN, conflicts_with = "sequence")]
        column: String,

        /// Literal sequence instead of a file row
        #[arg(long)]
        sequence: Option<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write a CSV of random DNA sequences
    Generate {
        #[arg(short, long, default_value = "data/bulk.csv")]
        output: PathBuf,

        /// Number of sequences
        #[arg(long, default_value_t = 10_000)]
        count: usize,

        /// Length of each sequence
        #[arg(long, default_value_t = 50)]
        length: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Header of the sequence column
        #[arg(long, default_value = DEFAULT_SEQUENCE_COLUMN)]
        header: String,
    },

    /// Write the default processing parameters as JSON
    Config {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Process {
            input,
            output,
            column,
            threads,
            config,
        } => {
            let params = process_params(config, column, threads)?;
            debug!(?params, "processing parameters");

            let mut table = SequenceTable::load_csv(&input, &params.sequence_column)?;
            table.annotate(&params)?;
            table.write_csv(&output)?;
            println!(
                "Processed {} sequences from '{}' into '{}'.",
                table.len(),
                input.display(),
                output.display()
            );
        }
        Commands::Stats {
            input,
            row,
            column,
            sequence,
            format,
        } => {
            let stats = match (sequence, input) {
                (Some(seq), _) => composition_stats(&Sequence::new(seq)),
                (None, Some(path)) => SequenceTable::load_csv(&path, &column)?.stats_for_row(row)?,
                (None, None) => {
                    return Err(DnaError::InvalidInput(
                        "either --input or --sequence is required".to_string(),
                    ))
                }
            };
            println!("{}", render_stats(&stats, format)?);
        }
        Commands::Generate {
            output,
            count,
            length,
            seed,
            header,
        } => {
            let params = GeneratorParams {
                count,
                length,
                header,
                seed,
            };
            let written = generate_csv_file(&output, &params)?;
            println!("Generated {} DNA sequences in '{}'.", written, output.display());
        }
        Commands::Config { output } => {
            match output {
                Some(path) => {
                    ProcessParams::default().write_json_file(&path)?;
                    info!(path = %path.display(), "wrote default config");
                }
                None => println!("{}", ProcessParams::default().to_json_pretty()?),
            }
        }
    }
    Ok(())
}

/// Merge a config file (if any) with command-line overrides.
fn process_params(
    config: Option<PathBuf>,
    column: Option<String>,
    threads: Option<usize>,
) -> Result<ProcessParams> {
    let mut params = match config {
        Some(path) => ProcessParams::from_json_file(path)?,
        None => ProcessParams::default(),
    };
    if let Some(column) = column {
        params.sequence_column = column;
    }
    if let Some(n) = threads {
        params.thread_count = ThreadCount::Fixed(n);
    }
    Ok(params)
}

fn render_stats(stats: &CompositionStats, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => stats.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(stats)?,
    })
}
