use std::path::PathBuf;
use std::process::ExitCode;

use api_index_discovery::discover::{DiscoverConfig, DiscoverError};
use api_index_discovery::generate_index;
use api_index_discovery::output::{OutputFormat, write_index};
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::filter::LevelFilter;

/// Missing, unknown, or malformed command-line arguments.
const EXIT_USAGE: u8 = 1;
/// Input path does not exist or is not a directory.
const EXIT_INVALID_INPUT: u8 = 2;
/// Index could not be rendered or written.
const EXIT_OUTPUT_FAILED: u8 = 3;

#[derive(Debug, Parser)]
#[command(name = "api-index", version)]
#[command(about = "Generate the API index for the code editor from HTML help files")]
struct Cli {
    /// Path to the "helpFiles" directory.
    #[arg(long)]
    input: PathBuf,
    /// Path to the output file (.json or .yaml/.yml select those formats;
    /// anything else gets the C array).
    #[arg(long)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<(), DiscoverError> {
    let config = DiscoverConfig::new(&cli.input);
    let (index, report) = generate_index(&config, |file| {
        println!("Parsing {}...", file.rel_file);
    })?;

    write_index(&cli.output, &index, OutputFormat::from_path(&cli.output))?;

    println!(
        "Wrote {} symbol(s) from {} file(s) to '{}'.",
        index.len(),
        report.files_parsed,
        cli.output.display()
    );
    println!(
        "Accepted {} of {} candidate(s).",
        report.accepted(),
        report.candidates.total()
    );
    if !report.skipped.is_empty() {
        eprintln!("{} unreadable file(s) skipped.", report.skipped.len());
    }

    Ok(())
}

fn exit_code(err: &DiscoverError) -> u8 {
    match err {
        DiscoverError::NotADirectory(_) | DiscoverError::InvalidSelector(_) => EXIT_INVALID_INPUT,
        DiscoverError::Json(_)
        | DiscoverError::Yaml(_)
        | DiscoverError::Write { .. }
        | DiscoverError::MalformedIndex { .. } => EXIT_OUTPUT_FAILED,
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::WARN)
        .with_target(false)
        .without_time()
        .init();
}
