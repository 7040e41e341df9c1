#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use row_life::{DEFAULT_MAX_LINE_LEN, PlayConfig, Result, RowLifeError, play};

#[derive(Debug, Parser)]
#[command(
    name = "row-life",
    about = "Classify each row of a file as vanishing, blinking, gliding or other",
    version
)]
struct Cli {
    /// Text file with one row per line: `#` filled, `.` empty.
    input: PathBuf,

    /// Longest accepted line, in characters.
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
    max_line_len: usize,

    /// Print every generation before each label.
    #[arg(long)]
    trace: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<usize> {
    let file = File::open(&cli.input)
        .map_err(|source| RowLifeError::resource_unavailable(&cli.input, source))?;
    let config = PlayConfig::default()
        .max_line_len(cli.max_line_len)
        .trace(cli.trace);
    let stdout = io::stdout();
    play(BufReader::new(file), BufWriter::new(stdout.lock()), &config)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("reading rows from {}", cli.input.display());

    match run(&cli) {
        Ok(lines) => log::info!("classified {lines} lines"),
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }
}
