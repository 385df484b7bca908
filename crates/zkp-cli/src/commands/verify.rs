// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use zkp_groth16::try_verify;
use zkp_types::{Bls12, Bn256, Curve};

use crate::output;
use crate::settings::Settings;

/// Returns whether the proof verified. Undecodable bytes count as a
/// rejection, not an error, so the reason is reported alongside.
pub fn run(settings: &Settings, vk: &str, proof: &str, inputs: &str) -> Result<bool> {
    let vk = settings.read_bytes(vk)?;
    let proof = settings.read_bytes(proof)?;
    let inputs = settings.read_bytes(inputs)?;

    let outcome = match settings.curve {
        Curve::Bls12381 => try_verify::<Bls12>(&vk, &proof, &inputs),
        Curve::Bn254 => try_verify::<Bn256>(&vk, &proof, &inputs),
    };
    let (valid, reason) = match outcome {
        Ok(valid) => (valid, None),
        Err(err) => (false, Some(err.to_string())),
    };

    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": settings.curve,
            "valid": valid,
            "reason": reason,
        }))?;
    } else {
        output::label("curve", settings.curve.name());
        match (valid, reason) {
            (true, _) => output::success("proof is valid"),
            (false, Some(reason)) => output::error_msg(&format!("proof is invalid: {reason}")),
            (false, None) => output::error_msg("proof is invalid"),
        }
    }
    Ok(valid)
}
