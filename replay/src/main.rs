//! Entry point for the Cambio replay board viewer.
//!
//! Loads a captured snapshot document, projects it for the configured
//! user and prints the board either human-readable or as JSON.

use anyhow::Context;
use clap::Parser;
use std::io::Read;

use cambio_replay::cli::ReplayCli;
use cambio_replay::config::ViewerConfig;
use cambio_replay::{pretty, project, Snapshot};

fn main() -> anyhow::Result<()> {
    let cli = ReplayCli::parse();

    // If debug is on: show everything at DEBUG level.
    // Otherwise keep our crates at INFO and quiet the rest.
    let log_filter = if cli.debug {
        "debug".to_string()
    } else {
        "cambio_replay=info,cambio_shared=info,warn".to_string()
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .init();

    let cfg = ViewerConfig::load_or_create(&cli.config)
        .with_context(|| format!("loading or creating config '{}'", cli.config.display()))?;

    // CLI override beats the config file; empty means spectator.
    let user_id = cli.user.clone().or_else(|| cfg.user_id.clone()).unwrap_or_default();
    let color = cfg.color && !cli.no_color;

    let text = read_snapshot(&cli.snapshot)?;
    let doc: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing snapshot document '{}'", cli.snapshot))?;
    let snapshot = Snapshot::new(doc);

    tracing::info!(user = %user_id, source = %cli.snapshot, "rendering snapshot");

    let projection = project(&snapshot, &user_id);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        print!("{}", pretty::format_board(&projection, color));
    }
    Ok(())
}

fn read_snapshot(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading snapshot from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("reading snapshot file '{}'", source))
    }
}
