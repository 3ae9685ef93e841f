use clap::{Parser, ValueEnum};
use kmer_freq::{prelude::*, report::RunSummary};
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::PathBuf,
};

/// Per-record canonical k-mer frequencies for FASTA/FASTQ files.
///
/// Complementary k-mers are counted together; for example TTGC is counted as
/// AACG.
#[derive(Parser, Debug)]
#[command(name = "kmer_freq", version, about)]
struct Args {
    /// Input FASTA or FASTQ file
    input: PathBuf,

    /// K-mer length, between 2 and 10 inclusive
    kmer_size: usize,

    /// Input format
    #[arg(long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Report raw window counts instead of frequencies
    #[arg(long, default_value_t = false)]
    counts: bool,

    /// Digits after the decimal point for frequencies
    #[arg(long, default_value_t = 10)]
    precision: usize,

    /// Values reported for records without a single valid k-mer
    #[arg(long, value_enum, default_value_t = Empty::Zero)]
    empty: Empty,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Auto,
    Fasta,
    Fastq,
}

impl From<Format> for SeqFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Auto => SeqFormat::Auto,
            Format::Fasta => SeqFormat::Fasta,
            Format::Fastq => SeqFormat::FastQ,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Empty {
    Zero,
    Nan,
}

impl From<Empty> for DegeneratePolicy {
    fn from(empty: Empty) -> Self {
        match empty {
            Empty::Zero => DegeneratePolicy::Zero,
            Empty::Nan => DegeneratePolicy::NaN,
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run(args: &Args) -> Result<RunSummary, FreqError> {
    // Validate k before touching the input so usage errors produce no output
    let mut table = CanonicalCountTable::new(args.kmer_size)?;

    let reader = SeqReader::from_filename(&args.input, args.format.into()).map_err(|source| FreqError::Input {
        path: args.input.clone(),
        source,
    })?;
    info!(
        "reading {path} as {format:?}; k = {k}, {buckets} canonical buckets",
        path = args.input.display(),
        format = reader.format(),
        k = table.kmer_length(),
        buckets = table.num_buckets()
    );

    let options = ReportOptions {
        values: if args.counts {
            ReportValues::Counts
        } else {
            ReportValues::Frequencies
        },
        precision: args.precision,
        policy: args.empty.into(),
        ..ReportOptions::default()
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(FreqError::Output)?),
        None => Box::new(stdout().lock()),
    };
    let mut report = ReportWriter::new(BufWriter::new(writer), options);

    write_report(reader, &mut table, &mut report)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let summary = run(&args).unwrap_or_fail();
    info!(
        "wrote {records} records ({degenerate} without valid k-mers), {windows} windows counted",
        records = summary.records,
        degenerate = summary.degenerate_records,
        windows = summary.windows
    );
}
