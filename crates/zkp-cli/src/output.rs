// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use colored::Colorize;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.green());
    }
}

pub fn error_msg(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.red());
    }
}

pub fn label(key: &str, val: &str) {
    if !is_json() {
        eprintln!("{} {}", format!("{}:", key).bold(), val);
    }
}

/// Machine-readable value on stdout in human mode, so `$(zkp empty-root)` works.
pub fn value(val: &str) {
    if !is_json() {
        println!("{val}");
    }
}

pub fn json_output(value: serde_json::Value) -> Result<()> {
    write_json(&mut std::io::stdout().lock(), &value)
}

pub fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}
