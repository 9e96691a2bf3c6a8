//! notesum CLI - statistical summaries of lecture notes
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, gathering the notes and handling top-level errors.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use dialoguer::Select;
use notesum::{loader, Config, Length, Method, Summarizer};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notesum")]
#[command(author, version, about = "Statistical summaries of lecture notes", long_about = None)]
struct Cli {
    /// Config file (defaults to notesum.toml here or in ~/.config/notesum)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise notes from a file, --text, stdin or your editor
    Summarise {
        /// Text or PDF file with the notes
        file: Option<PathBuf>,
        /// Notes given directly on the command line
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// extractive, bullet_points or key_terms
        #[arg(short, long)]
        method: Option<Method>,
        /// short, medium or long
        #[arg(short, long)]
        length: Option<Length>,
        /// Save the summary to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        /// Pick method and length from a menu
        #[arg(short, long)]
        interactive: bool,
    },
    /// Print the effective configuration
    Config,
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Summarise {
            file,
            text,
            method,
            length,
            output,
            json,
            interactive,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let notes = read_notes(text, file.as_deref())?;

            let (method, length) = if interactive {
                choose_options(&config)?
            } else {
                (
                    method.unwrap_or(config.summary.method),
                    length.unwrap_or(config.summary.length),
                )
            };

            eprintln!("{}", "Summarizing...".dimmed());
            let summarizer = Summarizer::new(config.limits);
            let summary = match summarizer.try_summarize(&notes, method, length) {
                Ok(summary) => summary,
                Err(e) => {
                    warn!(error = %e, "refusing to summarize");
                    eprintln!("{} {}", "Warning:".yellow().bold(), e);
                    bail!("please enter some notes to summarize");
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }

            eprintln!(
                "{}",
                format!("Summary complete - {} method, {} length", method, length).green()
            );

            if let Some(path) = output {
                if summary.is_empty() {
                    bail!("no summary to save");
                }
                loader::save_summary(&path, &summary.text)
                    .with_context(|| format!("could not save {}", path.display()))?;
                eprintln!("{} {}", "Saved:".green(), path.display());
            }
        }
        Commands::Config => {
            let config = load_config(cli.config.as_deref())?;
            print!("{}", config.to_toml()?);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "notesum", &mut io::stdout());
        }
    }

    Ok(())
}

/// Logs go to stderr; RUST_LOG wins over --verbose
fn init_logging(verbose: bool) {
    let default = if verbose { "notesum=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("could not load config {}", path.display())),
        None => Ok(Config::load()?),
    }
}

/// Notes from --text, a file, piped stdin, or the user's editor, in that order
fn read_notes(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        let notes = loader::load_notes(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        eprintln!("{} {}", "Loaded:".cyan(), notes.path.display());
        return Ok(notes.text);
    }

    if !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read notes from stdin")?;
        return Ok(buffer);
    }

    edit::edit("").context("failed to open an editor for the notes")
}

/// Menus for method and length, preselected from the config
fn choose_options(config: &Config) -> anyhow::Result<(Method, Length)> {
    let methods: Vec<&str> = Method::ALL.iter().map(Method::as_str).collect();
    let method_default = Method::ALL
        .iter()
        .position(|m| *m == config.summary.method)
        .unwrap_or(0);
    let method = Select::new()
        .with_prompt("Summary method")
        .items(&methods)
        .default(method_default)
        .interact()?;

    let lengths: Vec<&str> = Length::ALL.iter().map(Length::as_str).collect();
    let length_default = Length::ALL
        .iter()
        .position(|l| *l == config.summary.length)
        .unwrap_or(1);
    let length = Select::new()
        .with_prompt("Summary length")
        .items(&lengths)
        .default(length_default)
        .interact()?;

    Ok((Method::ALL[method], Length::ALL[length]))
}
