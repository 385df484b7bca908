// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

use crate::output;
use crate::settings::{load_settings, save_settings, settings_path, Settings, ALLOWED_KEYS};

/// Persist one key. Env vars and flags are ignored here so they never leak
/// into the file.
pub fn set(key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    let mut settings = load_settings()?;
    settings.set(key, value)?;
    save_settings(&settings)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }))?;
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

/// Effective settings: file, then env, then flags.
pub fn show(settings: &Settings) -> Result<()> {
    let path = settings_path()?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "path": path.display().to_string(),
            "curve": settings.curve,
            "depth": settings.depth,
            "encoding": settings.encoding,
        }))?;
    } else {
        output::label("path", &path.display().to_string());
        output::label("curve", settings.curve.name());
        output::label("depth", &settings.depth.to_string());
        output::label("encoding", &settings.encoding.to_string());
    }
    Ok(())
}
