use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use sanskrit_suffix_lib::{
    analyze, analyze_detailed, output, Error, RegistryConfig, Shell, SuffixRegistry,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sanskrit-suffix", about = "Sanskrit suffix identifier")]
struct Cli {
    /// Transliterated words to analyse. If omitted (and --list is not given),
    /// starts the interactive menu.
    words: Vec<String>,

    /// Print all known suffixes and exit.
    #[arg(long)]
    list: bool,

    /// Register an extra suffix before anything else, as SUFFIX=CATEGORY.
    #[arg(long = "add", value_name = "SUFFIX=CATEGORY", value_parser = parse_addition)]
    additions: Vec<(String, String)>,

    /// Output JSON instead of text reports.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// With --json, also list every suffix that matched each word.
    #[arg(long)]
    all: bool,

    /// Start from an empty registry instead of the built-in suffixes.
    #[arg(long)]
    no_seed: bool,

    /// Longest suffix accepted when adding.
    #[arg(long, default_value_t = RegistryConfig::default().max_suffix_len)]
    max_suffix_len: usize,

    /// Longest category accepted when adding.
    #[arg(long, default_value_t = RegistryConfig::default().max_category_len)]
    max_category_len: usize,
}

impl Cli {
    fn config(&self) -> RegistryConfig {
        RegistryConfig {
            max_suffix_len: self.max_suffix_len,
            max_category_len: self.max_category_len,
        }
    }
}

fn parse_addition(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((suffix, category)) => Ok((suffix.to_string(), category.to_string())),
        None => Err(format!("expected SUFFIX=CATEGORY, got {s:?}")),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "aborting");
            eprintln!("sanskrit-suffix: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Error> {
    let mut registry = if cli.no_seed {
        SuffixRegistry::new()
    } else {
        SuffixRegistry::seeded()
    };
    let config = cli.config();

    for (suffix, category) in &cli.additions {
        registry.add(suffix, category, &config)?;
    }

    if cli.list {
        let text = if cli.json {
            output::to_json(&registry.entries().collect::<Vec<_>>(), cli.pretty)?
        } else {
            output::to_listing(&registry)
        };
        println!("{}", text.trim_end());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.words.is_empty() {
        debug!(entries = registry.len(), "starting interactive shell");
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut shell = Shell::new(registry, config, stdin.lock(), stdout.lock());
        shell.run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut status = ExitCode::SUCCESS;
    let mut stdout = io::stdout().lock();
    for word in &cli.words {
        let text = if cli.json && cli.all {
            analyze_detailed(&registry, word).and_then(|d| output::to_json(&d, cli.pretty))
        } else if cli.json {
            analyze(&registry, word).and_then(|o| output::to_json(&o, cli.pretty))
        } else {
            analyze(&registry, word).map(|o| output::to_report(&o))
        };
        match text {
            Ok(t) => writeln!(stdout, "{}", t.trim_end())?,
            Err(Error::EmptyInput) => {
                eprintln!("Empty word.");
                status = ExitCode::FAILURE;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(status)
}
