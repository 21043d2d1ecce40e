// headify: split a C source unit into header and implementation

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, warn, LevelFilter};

use headify::config::{DEFAULT_ENTRY_POINT, DEFAULT_SUFFIX};
use headify::scanner;
use headify::unit::UnitPaths;
use headify::{build_output, element_listing, phrase_listing, phrase_summary, HeadifyError, Options};

#[derive(Parser, Debug)]
#[command(name = "headify", version)]
#[command(about = "Split a C source unit into a public header and an implementation")]
struct Args {
    /// C source unit (`name.hy.c` produces `name.h` and `name.c`)
    file: PathBuf,

    /// Directory for the generated files (default: next to the source)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Output name suffix for units without the `.hy` marker
    #[arg(short, long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Function that is never made static
    #[arg(short, long, default_value = DEFAULT_ENTRY_POINT)]
    entry_point: String,

    /// Print the element or phrase listing and exit
    #[arg(long, value_enum)]
    dump: Option<Dump>,

    /// Print header and implementation instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dump {
    Elements,
    Phrases,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let options = Options::default()
        .with_entry_point(args.entry_point.as_str())
        .with_suffix(args.suffix.as_str());
    let paths = UnitPaths::from_source_path(&args.file, args.out_dir.as_deref(), &options.suffix)?;

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    if source.trim().is_empty() {
        warn!("{} is empty", args.file.display());
    }

    let elements = match scanner::scan(&source) {
        Ok(elements) => elements,
        Err(err) => {
            eprintln!("{}", HeadifyError::from(err).report(&paths.unit, &source));
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(dump) = args.dump {
        match dump {
            Dump::Elements => print!("{}", element_listing(&elements)),
            Dump::Phrases => print!("{}", phrase_listing(&elements)),
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Both outputs are built before anything is written
    let output = match build_output(&paths.unit, &elements, &options) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("{}", err.report(&paths.unit, &source));
            return Ok(ExitCode::FAILURE);
        }
    };

    if log::log_enabled!(log::Level::Info) {
        let mut summary: Vec<_> = phrase_summary(&elements).into_iter().collect();
        summary.sort_by_key(|(kind, _)| kind.short_name());
        let summary = summary
            .iter()
            .map(|(kind, count)| format!("{}={}", kind, count))
            .collect::<Vec<_>>()
            .join(", ");
        info!("{}: {}", paths.unit, summary);
    }

    if args.stdout {
        print!("{}", output.header);
        print!("{}", output.implementation);
        return Ok(ExitCode::SUCCESS);
    }

    if paths.header == args.file || paths.implementation == args.file {
        bail!(
            "refusing to overwrite the source {}; use a different --suffix",
            args.file.display()
        );
    }
    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    fs::write(&paths.header, &output.header)
        .with_context(|| format!("failed to write {}", paths.header.display()))?;
    info!("wrote {}", paths.header.display());
    fs::write(&paths.implementation, &output.implementation)
        .with_context(|| format!("failed to write {}", paths.implementation.display()))?;
    info!("wrote {}", paths.implementation.display());

    Ok(ExitCode::SUCCESS)
}
