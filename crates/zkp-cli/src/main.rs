// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod output;
mod settings;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zkp_types::Curve;

use crate::settings::{Encoding, Settings};

#[derive(Parser)]
#[command(name = "zkp", version, about = "Groth16 verifier and Pedersen Merkle accumulator")]
struct Cli {
    /// Curve family: bls12-381 or bn254
    #[arg(long, global = true, env = "ZKP_CURVE")]
    curve: Option<Curve>,
    /// Merkle tree depth
    #[arg(long, global = true, env = "ZKP_DEPTH")]
    depth: Option<usize>,
    /// Encoding of byte arguments and results
    #[arg(long, global = true, value_enum)]
    encoding: Option<Encoding>,
    /// Print results as JSON on stdout
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify a Groth16 proof
    Verify {
        #[arg(long)]
        vk: String,
        #[arg(long)]
        proof: String,
        /// Concatenated 32-byte public inputs
        #[arg(long, default_value = "")]
        inputs: String,
    },
    /// Root after writing one leaf into an empty slot
    AddItem {
        #[arg(long)]
        root: String,
        /// Concatenated 32-byte siblings, leaf level first
        #[arg(long)]
        siblings: String,
        #[arg(long)]
        index: u64,
        #[arg(long)]
        leaf: String,
    },
    /// Append a batch of leaves and return the new root and next path
    Append {
        #[arg(long)]
        root: String,
        #[arg(long)]
        siblings: String,
        #[arg(long)]
        index: u64,
        /// Concatenated 32-byte leaves
        #[arg(long)]
        leaves: String,
    },
    /// Root of a tree with no leaves
    EmptyRoot,
    /// Build a tree from leaves and print its root and a path
    Tree {
        /// Concatenated 32-byte leaves, in slot order
        #[arg(long, default_value = "")]
        leaves: String,
        /// Slot whose path to print; defaults to the next free slot
        #[arg(long)]
        path_index: Option<u64>,
    },
    /// Pedersen compression of two nodes at a level
    Compress {
        #[arg(long)]
        left: String,
        #[arg(long)]
        right: String,
        #[arg(long)]
        level: usize,
    },
    /// Show or edit ~/.zkp/config.json
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Persist one setting
    Set { key: String, value: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ZKP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Flags (and their env vars) override the config file.
fn effective_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = settings::load_settings()?;
    if let Some(curve) = cli.curve {
        settings.curve = curve;
    }
    if let Some(depth) = cli.depth {
        settings.depth = depth;
    }
    if let Some(encoding) = cli.encoding {
        settings.encoding = encoding;
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn run(cli: Cli) -> Result<bool> {
    let settings = effective_settings(&cli)?;
    match cli.command {
        Cmd::Verify { vk, proof, inputs } => commands::verify::run(&settings, &vk, &proof, &inputs),
        Cmd::AddItem {
            root,
            siblings,
            index,
            leaf,
        } => commands::merkle::add_item(&settings, &root, &siblings, index, &leaf).map(|_| true),
        Cmd::Append {
            root,
            siblings,
            index,
            leaves,
        } => commands::merkle::append(&settings, &root, &siblings, index, &leaves).map(|_| true),
        Cmd::EmptyRoot => commands::merkle::empty_root(&settings).map(|_| true),
        Cmd::Tree { leaves, path_index } => {
            commands::merkle::tree(&settings, &leaves, path_index).map(|_| true)
        }
        Cmd::Compress { left, right, level } => {
            commands::merkle::compress(&settings, &left, &right, level).map(|_| true)
        }
        Cmd::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&settings).map(|_| true),
            ConfigAction::Set { key, value } => commands::config::set(&key, &value).map(|_| true),
        },
    }
}

/// Print `err` as a JSON object on `out`, or on stderr if that write fails.
fn report_json_error<W: Write>(out: &mut W, err: &anyhow::Error) -> bool {
    let message = format!("{err:#}");
    match output::write_json(out, &serde_json::json!({ "error": message })) {
        Ok(()) => true,
        Err(write_err) => {
            debug!(error = %write_err, "cannot write JSON error");
            eprintln!("error: {message}");
            false
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    output::set_json_mode(cli.json);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            if output::is_json() {
                report_json_error(&mut std::io::stdout().lock(), &err);
            } else {
                output::error_msg(&format!("error: {err:#}"));
            }
            ExitCode::from(2)
        }
    }
}
