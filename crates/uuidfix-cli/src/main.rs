use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use uuidfix_io::prelude::{Mode, process_all, resolve_targets};

#[derive(Debug, Parser)]
#[command(
    name = "fix-uuids",
    version,
    about = "Repair malformed UUID prefixes in SQL schema and seed files"
)]
struct Cli {
    /// Files to correct (default: complete_schema.sql seed.sql)
    files: Vec<PathBuf>,

    /// Base directory for relative file paths
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Report files that need fixing without writing them; exits 1 if any do
    #[arg(long)]
    check: bool,

    /// Print a JSON run summary instead of status lines
    #[arg(long)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Returns the process exit code on success.
fn run(cli: &Cli) -> anyhow::Result<i32> {
    let targets = resolve_targets(cli.dir.as_deref(), &cli.files);
    let mode = if cli.check { Mode::Check } else { Mode::Write };

    let summary = if cli.json {
        process_all(&targets, mode, &mut io::sink())?
    } else {
        process_all(&targets, mode, &mut io::stdout().lock())?
    };

    if cli.json {
        println!("{}", summary.to_pretty_json()?);
    }

    log::debug!(
        "{} file(s) fixed, {} need fixing, {} replacement(s)",
        summary.files_fixed,
        summary.files_needing_fix,
        summary.totals.total()
    );

    Ok(if summary.needs_fix() { 1 } else { 0 })
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            // I/O failures: the run stopped at the failing file.
            eprintln!("{e:#}");
            process::exit(2);
        }
    }
}
