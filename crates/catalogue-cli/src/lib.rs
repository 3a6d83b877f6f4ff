//! Pattern Catalogue Driver
//!
//! Command-line front end that runs the illustrations and the notification
//! chain scenario. Demonstration text goes to the provided writer; logs go to
//! stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use notify_chain::{ChainConfig, Sink, TextSink};
use patterns::behavioral::{chain_of_responsibility::ORDER_MESSAGES, command};
use patterns::Catalogue;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "pattern-catalogue", version, about = "Gang-of-Four pattern illustrations")]
pub struct Cli {
    /// Log verbosity written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Run the order-processing messages through a notification chain
    Chain {
        /// Chain description (TOML, YAML or JSON); defaults to the built-in chain
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the resolved chain as JSON instead of running it
        #[arg(long)]
        dump_config: bool,
    },
    /// Press the light switch once per token, then show the history
    Command {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Run one illustration by name
    Pattern { name: String },
    /// List every illustration
    List,
    /// Run every illustration in catalogue order
    All,
}

/// Initialize logging
pub fn init_logging(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")
}

/// Execute `cli`, writing demonstration output to writers from `make_writer`
pub fn run<W, F>(cli: &Cli, make_writer: F) -> anyhow::Result<()>
where
    W: Write + 'static,
    F: Fn() -> W,
{
    match &cli.action {
        Action::Chain { config, dump_config } => {
            let chain_config = match config {
                Some(path) => ChainConfig::load(path)
                    .with_context(|| format!("Failed to load chain config {}", path.display()))?,
                None => ChainConfig::default(),
            };

            if *dump_config {
                let mut out = make_writer();
                writeln!(out, "{}", serde_json::to_string_pretty(&chain_config)?)?;
                return Ok(());
            }

            let chain = chain_config
                .build_with(|kind| Box::new(TextSink::with_writer(kind, make_writer())) as Box<dyn Sink>)?;
            for (message, severity) in ORDER_MESSAGES {
                let report = chain.notify(message, severity);
                info!(severity = %severity, visited = report.visited, emitted = report.emitted.len(), "Message dispatched");
            }
        }
        Action::Command { tokens } => {
            let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
            write_lines(&mut make_writer(), &command::run(&tokens))?;
        }
        Action::Pattern { name } => {
            write_lines(&mut make_writer(), &Catalogue::run(name)?)?;
        }
        Action::List => {
            let mut out = make_writer();
            for entry in Catalogue::entries() {
                writeln!(out, "{:<24} {}", entry.name, entry.category)?;
            }
        }
        Action::All => {
            let mut out = make_writer();
            for entry in Catalogue::entries() {
                writeln!(out, "== {} ({})", entry.name, entry.category)?;
                write_lines(&mut out, &(entry.demo)()?)?;
            }
        }
    }

    Ok(())
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
