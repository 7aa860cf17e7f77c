use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use autoreplace::Document;
use autoreplace::config::load_rules;
use autoreplace::script::{parse_script, type_keys};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rules file (TOML)
    #[arg(short = 'r', long, value_name = "FILE")]
    rules: PathBuf,

    /// Keystroke script; read from stdin when omitted
    #[arg(value_name = "SCRIPT")]
    script: Option<String>,

    /// Kind of the initial empty block
    #[arg(short = 'k', long, default_value = "paragraph")]
    kind: String,

    /// Log each replace as it fires
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let rules = load_rules(&args.rules)?;
    tracing::debug!(count = rules.len(), "rules loaded");

    let script = match args.script {
        Some(script) => script,
        None => {
            let mut stdin_contents = String::new();
            io::stdin()
                .read_to_string(&mut stdin_contents)
                .context("Failed to read stdin")?;
            stdin_contents.trim_end_matches('\n').to_string()
        }
    };
    let keys = parse_script(&script)?;

    let document = type_keys(&rules, Document::new(args.kind), &keys);
    println!("{}", document);
    Ok(())
}
