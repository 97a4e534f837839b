use clap::{ArgAction, Parser as ClapParser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tokpatch::cli::{self, ApplyOptions, CliError, Source};
use tokpatch::output::reports_to_json;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "tokpatch")]
#[command(about = "tokpatch - Rewrite source code with pattern => substitution rules")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a rule file to a source file
    Apply {
        /// Rule file
        #[arg(long)]
        patch: Option<PathBuf>,

        /// Source file (reads from stdin if not provided)
        #[arg(long = "in")]
        input: Option<PathBuf>,

        /// Output file (writes to stdout if not provided)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print per-rule match counts as JSON to stderr
        #[arg(long)]
        report: bool,
    },

    /// Parse a rule file and list its rules without applying them
    Check {
        /// Rule file
        #[arg(long)]
        patch: PathBuf,
    },

    /// Show the tokens a source file is split into
    Tokens {
        /// Source file (reads from stdin if not provided)
        #[arg(long = "in")]
        input: Option<PathBuf>,

        /// Print the tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'tokpatch docs' to list categories)
        category: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tokpatch={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Apply {
            patch,
            input,
            out,
            report,
        } => run_apply(patch, input, out, report),
        Commands::Check { patch } => run_check(patch),
        Commands::Tokens { input, json } => run_tokens(input, json),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// `--in` if given, else stdin when something is piped in.
fn read_source(input: Option<PathBuf>) -> Result<Option<Source>, CliError> {
    match input {
        Some(path) => Ok(Some(Source::File(path))),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(Source::Text(buffer)))
        }
        None => Ok(None),
    }
}

fn run_apply(
    patch: Option<PathBuf>,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    report: bool,
) -> Result<(), CliError> {
    // Missing arguments are reported before stdin is touched
    if patch.is_none() {
        return Err(CliError::NoRuleFile);
    }

    let options = ApplyOptions {
        patch,
        source: read_source(input)?,
        output: out,
    };

    let result = cli::execute_apply(&options)?;

    if result.written_to.is_none() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(result.text.as_bytes())?;
        stdout.flush()?;
    }
    if report {
        eprintln!("{}", serde_json::to_string_pretty(&reports_to_json(&result.reports))?);
    }
    Ok(())
}

fn run_check(patch: PathBuf) -> Result<(), CliError> {
    let result = cli::execute_check(&patch)?;
    for rule in &result.rules {
        println!("{}", rule);
    }
    println!("{} rules ok", result.rules.len());
    Ok(())
}

fn run_tokens(input: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let source = match read_source(input)? {
        Some(Source::File(path)) => std::fs::read_to_string(&path)
            .map_err(|source| CliError::Read { path, source })?,
        Some(Source::Text(text)) => text,
        None => return Err(CliError::NoInput),
    };
    print!("{}", cli::execute_tokens(&source, json)?);
    Ok(())
}
