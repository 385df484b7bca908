// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! `~/.zkp/config.json` and the byte-argument codecs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use zkp_merkle::{AccumulatorConfig, DEFAULT_DEPTH};
use zkp_types::Curve;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Base64,
    Hex,
}

impl Encoding {
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let text = text.trim();
        match self {
            Encoding::Base64 => STANDARD.decode(text).context("invalid base64"),
            Encoding::Hex => {
                let text = text.strip_prefix("0x").unwrap_or(text);
                hex::decode(text).context("invalid hex")
            }
        }
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub curve: Curve,
    pub depth: usize,
    pub encoding: Encoding,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            curve: Curve::Bls12381,
            depth: DEFAULT_DEPTH,
            encoding: Encoding::Base64,
        }
    }
}

impl Settings {
    pub fn accumulator_config(&self) -> Result<AccumulatorConfig> {
        AccumulatorConfig::with_depth(self.depth).context("invalid tree depth")
    }

    /// Decode a byte argument: literal text in the selected encoding, or
    /// `@path` for a file holding that text.
    pub fn read_bytes(&self, arg: &str) -> Result<Vec<u8>> {
        match arg.strip_prefix('@') {
            Some(path) => {
                let text = fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
                self.encoding
                    .decode(&text)
                    .with_context(|| format!("cannot decode contents of {path}"))
            }
            None => self.encoding.decode(arg),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "curve" => self.curve = value.parse()?,
            "depth" => {
                let depth: usize = value.parse().context("depth must be an integer")?;
                AccumulatorConfig::with_depth(depth)?;
                self.depth = depth;
            }
            "encoding" => {
                self.encoding = Encoding::from_str(value, true).map_err(anyhow::Error::msg)?;
            }
            _ => bail!("unknown config key: {key}"),
        }
        Ok(())
    }
}

pub const ALLOWED_KEYS: &[&str] = &["curve", "depth", "encoding"];

pub fn settings_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".zkp").join("config.json"))
}

/// Missing file means defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid config JSON")
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_settings() -> Result<Settings> {
    load_settings_from(&settings_path()?)
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&settings_path()?, settings)
}
