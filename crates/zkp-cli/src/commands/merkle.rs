// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use zkp_merkle::{AccumulatorConfig, AnyAccumulator, SparseMerkleTree};
use zkp_pedersen::PedersenFamily;
use zkp_types::{read_scalars_be, write_field_be, Bls12, Bn256, Curve, ScalarField, SCALAR_BYTES};

use crate::output;
use crate::settings::Settings;

fn accumulator(settings: &Settings) -> Result<AnyAccumulator> {
    AnyAccumulator::new(settings.curve, settings.accumulator_config()?).context("cannot build accumulator")
}

fn print_root(settings: &Settings, root: &[u8]) -> Result<()> {
    let root = settings.encoding.encode(root);
    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": settings.curve,
            "depth": settings.depth,
            "root": root,
        }))
    } else {
        output::value(&root);
        Ok(())
    }
}

pub fn add_item(settings: &Settings, root: &str, siblings: &str, index: u64, leaf: &str) -> Result<()> {
    let root = settings.read_bytes(root)?;
    let siblings = settings.read_bytes(siblings)?;
    let leaf = settings.read_bytes(leaf)?;

    let acc = accumulator(settings)?;
    let new_root = acc
        .add_item(&root, &siblings, index, &leaf)
        .with_context(|| format!("add_item at index {index} failed"))?;
    print_root(settings, &new_root)
}

pub fn append(settings: &Settings, root: &str, siblings: &str, index: u64, leaves: &str) -> Result<()> {
    let root = settings.read_bytes(root)?;
    let siblings = settings.read_bytes(siblings)?;
    let leaves = settings.read_bytes(leaves)?;

    let acc = accumulator(settings)?;
    let out = acc
        .append(&root, &siblings, index, &leaves)
        .with_context(|| format!("append at index {index} failed"))?;
    let (new_root, next_siblings) = out.split_at(SCALAR_BYTES);
    let next_index = index + (leaves.len() / SCALAR_BYTES) as u64;

    let new_root = settings.encoding.encode(new_root);
    let next_siblings = settings.encoding.encode(next_siblings);
    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": settings.curve,
            "depth": settings.depth,
            "root": new_root,
            "siblings": next_siblings,
            "next_index": next_index,
        }))?;
    } else {
        output::label("next_index", &next_index.to_string());
        output::label("siblings", &next_siblings);
        output::value(&new_root);
    }
    Ok(())
}

pub fn empty_root(settings: &Settings) -> Result<()> {
    let acc = accumulator(settings)?;
    print_root(settings, &acc.empty_root())
}

pub fn compress(settings: &Settings, left: &str, right: &str, level: usize) -> Result<()> {
    let left = settings.read_bytes(left)?;
    let right = settings.read_bytes(right)?;
    let acc = accumulator(settings)?;
    let node = acc.compress(&left, &right, level).context("compress failed")?;
    let node = settings.encoding.encode(&node);
    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": settings.curve,
            "level": level,
            "node": node,
        }))
    } else {
        output::value(&node);
        Ok(())
    }
}

/// Root, next slot and one authentication path of a tree holding `leaves`.
struct TreeFixture {
    root: Vec<u8>,
    next_index: u64,
    path_index: u64,
    siblings: Vec<u8>,
}

fn build_tree<F: PedersenFamily>(config: AccumulatorConfig, leaves: &[u8], path_index: Option<u64>) -> Result<TreeFixture> {
    let mut tree = SparseMerkleTree::<F>::new(config)?;
    for leaf in read_scalars_be::<ScalarField<F>>(leaves).context("leaves are not 32-byte nodes")? {
        tree.insert(leaf)?;
    }
    let path = match path_index {
        Some(index) => tree.path(index)?,
        None => tree.next_path()?,
    };
    let mut root = Vec::with_capacity(SCALAR_BYTES);
    write_field_be(&tree.root()?, &mut root);
    Ok(TreeFixture {
        root,
        next_index: tree.next_index(),
        path_index: path.index,
        siblings: path.encode_siblings(),
    })
}

/// Build a full in-memory tree, for producing `append`/`add-item` fixtures.
pub fn tree(settings: &Settings, leaves: &str, path_index: Option<u64>) -> Result<()> {
    let leaves = settings.read_bytes(leaves)?;
    let config = settings.accumulator_config()?;
    let fixture = match settings.curve {
        Curve::Bls12381 => build_tree::<Bls12>(config, &leaves, path_index)?,
        Curve::Bn254 => build_tree::<Bn256>(config, &leaves, path_index)?,
    };

    let root = settings.encoding.encode(&fixture.root);
    let siblings = settings.encoding.encode(&fixture.siblings);
    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": settings.curve,
            "depth": settings.depth,
            "root": root,
            "next_index": fixture.next_index,
            "path_index": fixture.path_index,
            "siblings": siblings,
        }))?;
    } else {
        output::label("next_index", &fixture.next_index.to_string());
        output::label("path_index", &fixture.path_index.to_string());
        output::label("siblings", &siblings);
        output::value(&root);
    }
    Ok(())
}
