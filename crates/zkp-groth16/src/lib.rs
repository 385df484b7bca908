// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verification over BLS12-381 and BN254.
//!
//! | Item | Input | Output |
//! |---|---|---|
//! | [`verify`] | vk, proof, inputs as bytes | `bool`, never an error |
//! | [`try_verify`] | same | `ZkpResult<bool>` |
//! | [`verify_proof`] | decoded key, proof, scalars | `ZkpResult<bool>` |
//! | [`verify_prepared`] | prepared key, proof, scalars | `ZkpResult<bool>` |

pub mod pairing;
pub mod types;
pub mod verifier;

pub use types::{decode_inputs, encode_inputs, PreparedVerificationKey, Proof, VerificationKey};
pub use verifier::{
    prepare_verifying_key, try_verify, verify, verify_for_curve, verify_prepared, verify_proof,
};
