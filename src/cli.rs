//! Command-line interface for shortcut-bridge.
//!
//! `parse` checks a single shortcut string; `check` loads a shortcut file
//! and reports which entries fail to parse.

use crate::dispatcher::{Dispatcher, EventQueue};
use crate::registry::ShortcutRegistry;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use shortcut_bridge_config::{Platform, ShortcutConfig};
use shortcut_bridge_keys::parse_shortcut_with_diagnostics;
use std::path::PathBuf;
use std::sync::Arc;

/// shortcut-bridge - Global keyboard shortcut adapter
#[derive(Parser)]
#[command(name = "shortcut-bridge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a shortcut string and print its accelerator
    Parse {
        /// Shortcut string, e.g. "ctrl+shift+a"
        shortcut: String,

        /// Platform to interpret the shortcut for (macos, windows, linux)
        #[arg(long)]
        platform: Option<Platform>,

        /// Print the accelerator as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load a shortcut file and report entries that fail to parse
    Check {
        /// Shortcut file (defaults to the per-user shortcut file)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

/// Run a parsed command, returning the process exit code.
pub fn run(command: Commands) -> Result<i32> {
    match command {
        Commands::Parse {
            shortcut,
            platform,
            json,
        } => run_parse(&shortcut, platform.unwrap_or_default(), json),
        Commands::Check { config } => run_check(config),
    }
}

fn run_parse(shortcut: &str, platform: Platform, json: bool) -> Result<i32> {
    let outcome = parse_shortcut_with_diagnostics(shortcut, platform);
    let accelerator = outcome.accelerator;

    if json {
        println!("{}", serde_json::to_string_pretty(&accelerator)?);
    } else if accelerator.is_valid() {
        println!("{accelerator}");
    } else {
        println!("Can not parse shortcut: {shortcut}.");
    }

    for token in &outcome.ignored_tokens {
        eprintln!("warning: ignored token '{token}'");
    }
    if outcome.multiple_keys {
        eprintln!("warning: more than one key in '{shortcut}'");
    }

    Ok(if accelerator.is_valid() { 0 } else { 1 })
}

fn run_check(path: Option<PathBuf>) -> Result<i32> {
    let config = match path {
        Some(path) => ShortcutConfig::load_from(&path)
            .with_context(|| format!("Failed to load shortcut file {}", path.display()))?,
        None => ShortcutConfig::load().context("Failed to load shortcut file")?,
    };

    let queue = Arc::new(EventQueue::new());
    let dispatcher: Arc<dyn Dispatcher> = queue.clone();
    let registry = ShortcutRegistry::from_config(&config, Arc::downgrade(&dispatcher));

    for handle in registry.handles() {
        if handle.is_valid() {
            println!("{}\t{}\t{}", handle.id(), handle.shortcut(), handle.accelerator());
        }
    }

    let failed: Vec<_> = queue
        .drain_events()
        .into_iter()
        .filter(|event| event.name == "failed")
        .collect();
    for event in &failed {
        let message = event
            .args
            .first()
            .and_then(|arg| arg.as_str())
            .unwrap_or_default();
        println!("{}\tfailed\t{}", event.source, message);
    }

    println!(
        "{} shortcuts, {} failed ({})",
        registry.len(),
        failed.len(),
        registry.platform()
    );

    Ok(if failed.is_empty() { 0 } else { 1 })
}
