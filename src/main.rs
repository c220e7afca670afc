//! Command-line front end: summarizes a file or stdin as bytes, words and
//! double-words.

use std::fs::File;
use std::io::{self, BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use bytestats::{BitWidth, StreamStats};
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};

/// Report mean, uniqueness and entropy of a byte stream.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose diagnostics on stderr. (Specify twice for more verbosity.)
    #[arg(short = 'v', long, action = ArgAction::Count, default_value_t = 0)]
    verbose: u8,

    /// File to analyze. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,
}

impl Cli {
    /// Gets the log level based on the user-supplied verbosity level.
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }

    fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .compact()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut stream = StreamStats::new();

    let bytes_read = match cli.input_path() {
        Some(path) => {
            info!(path = %path.display(), "Reading input file.");
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            stream
                .read_from(file)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            info!("Reading standard input.");
            stream.read_from(io::stdin().lock()).context("failed to read stdin")?
        }
    };
    info!(bytes = bytes_read, "Reached end of input.");

    for width in BitWidth::ALL {
        let acc = stream.accumulator(width);
        debug!(
            width = width.bits(),
            fields = acc.len(),
            unique = acc.unique(),
            "Accumulated fields."
        );
    }

    let report = stream.finish().context("cannot summarize input")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{}", report)?;
    out.flush()?;

    Ok(())
}
