// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-heuristics CLI

use a11y_heuristics::analyzers;
use a11y_heuristics::checks::{self, Check};
use a11y_heuristics::config::{self, Config};
use a11y_heuristics::report::{generate_report, OutputFormat};
use a11y_heuristics::scanner;
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Heuristic accessibility checks for markup
#[derive(Parser)]
#[command(name = "a11y-heuristics")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Configuration file (defaults apply if it does not exist)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all enabled checks on a directory
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Analyze a single file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,
    },

    /// Print the pass/fail verdict of each check for a fragment
    Verdict {
        /// File holding the fragment, or `-` for stdin
        input: PathBuf,

        /// Only run these checks (repeatable)
        #[arg(long = "only", value_parser = parse_check)]
        only: Vec<Check>,

        /// Print verdicts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a SARIF report for a directory
    Report {
        /// Directory to scan
        dir: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the available checks
    Checks,

    /// Write the default configuration file
    InitConfig {
        /// Destination (defaults to .a11y-heuristics.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn parse_check(s: &str) -> Result<Check, String> {
    s.parse()
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11y_heuristics=debug")
    } else {
        EnvFilter::new("a11y_heuristics=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config::default_config_path);
    config::load_config(&path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command {
        Commands::Check { dir, format, output } => {
            let config = load_config(cli.global.config.as_deref())?;
            let findings = scanner::scan_directory(&dir, &config)?;
            let report = generate_report(&findings, format.into())?;
            write_output(&report, output.as_deref())?;

            if findings.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Analyze { file, format } => {
            let config = load_config(cli.global.config.as_deref())?;
            let findings = scanner::scan_file(&file, &config)
                .with_context(|| format!("analyzing {}", file.display()))?;
            println!("{}", generate_report(&findings, format.into())?);

            if findings.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Verdict { input, only, json } => {
            let html = read_input(&input)?;
            let selected = if only.is_empty() { Check::ALL.to_vec() } else { only };
            let verdicts: Vec<(Check, bool)> = selected
                .into_iter()
                .map(|c| (c, checks::check(c, &html)))
                .collect();

            if json {
                let map: serde_json::Map<String, serde_json::Value> = verdicts
                    .iter()
                    .map(|(c, ok)| (c.to_string(), serde_json::Value::Bool(*ok)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for (check, ok) in &verdicts {
                    println!("{:<18} {}", check, if *ok { "PASS" } else { "FAIL" });
                }
            }

            if verdicts.iter().any(|(_, ok)| !ok) {
                std::process::exit(1);
            }
        }

        Commands::Report { dir, output } => {
            let config = load_config(cli.global.config.as_deref())?;
            let findings = scanner::scan_directory(&dir, &config)?;
            let report = generate_report(&findings, OutputFormat::Sarif)?;
            write_output(&report, output.as_deref())?;
        }

        Commands::Checks => {
            let config = load_config(cli.global.config.as_deref())?;
            for analyzer in analyzers::all_analyzers() {
                let state = if config.is_enabled(analyzer.check()) { "on" } else { "off" };
                println!("{:<18} {:<4} {}", analyzer.check(), state, analyzer.description());
            }
        }

        Commands::InitConfig { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            config::write_default_config(&path)?;
            eprintln!("Configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Read a fragment from a file, or stdin for `-`
fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
    }
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
