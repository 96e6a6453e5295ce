use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use scaftrim::config::{self, Config, OutputPaths};
use scaftrim::seqio::{FastaFileSink, MemorySink};
use scaftrim::CleanError;

/// scaftrim CLI
#[derive(Parser)]
#[command(name = "scaftrim")]
#[command(version)]
#[command(about = "Remove excluded scaffolds and cut contaminant spans into three cleaned FASTA files", long_about = None)]
struct Cli {
    /// Scaffold sequences (FASTA, optionally gzipped)
    #[arg(long, default_value = config::DEFAULT_FASTA)]
    fasta: PathBuf,
    /// Exclusion table (first tab-separated field is the scaffold id)
    #[arg(long, default_value = config::DEFAULT_EXCLUDE)]
    exclude: PathBuf,
    /// Trim table (id, length, spans, source)
    #[arg(long, default_value = config::DEFAULT_TRIM)]
    trim: PathBuf,
    /// Output with excluded scaffolds removed only
    #[arg(long, default_value = config::DEFAULT_OUTPUT_EXCLUDE_ONLY)]
    out_exclude_only: PathBuf,
    /// Output with spans cut, not-cleaned scaffolds only stripped
    #[arg(long, default_value = config::DEFAULT_OUTPUT_LENIENT)]
    out_lenient: PathBuf,
    /// Output with spans cut and not-cleaned scaffolds removed
    #[arg(long, default_value = config::DEFAULT_OUTPUT_FULL_TRIM)]
    out_full_trim: PathBuf,
    /// Directory to place relative output paths in
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Minimum sequence/fragment length kept in any output
    #[arg(long, default_value_t = scaftrim::DEFAULT_MIN_LENGTH)]
    min_length: usize,
    /// Run everything but do not write output files
    #[arg(long)]
    dry_run: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        let mut outputs = OutputPaths {
            exclude_only: self.out_exclude_only.clone(),
            lenient: self.out_lenient.clone(),
            full_trim: self.out_full_trim.clone(),
        };
        if let Some(dir) = &self.out_dir {
            outputs = outputs.in_dir(dir);
        }
        Config::default()
            .with_fasta(&self.fasta)
            .with_exclude(&self.exclude)
            .with_trim(&self.trim)
            .with_outputs(outputs)
            .with_min_length(self.min_length)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        let exit_code = match e.downcast_ref::<CleanError>() {
            Some(CleanError::Io { .. }) => 3,
            Some(err) if err.is_parse() => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    if let Some(dir) = &cli.out_dir {
        if !cli.dry_run {
            std::fs::create_dir_all(dir).with_context(|| format!("creating output directory {}", dir.display()))?;
        }
    }

    let summary = if cli.dry_run {
        scaftrim::run(&config, &mut MemorySink::new())?
    } else {
        scaftrim::run(&config, &mut FastaFileSink::new(config.outputs.clone()))?
    };

    eprintln!(
        "clean: fasta={} | min_length={} | dry_run={}",
        config.fasta.display(),
        config.min_length,
        cli.dry_run
    );
    print!("{}", summary);
    Ok(())
}
