//! Legacy `<block>` → target `Block`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::document::{Block, States, OPTIONS_BLOCK};
use crate::error::ConverterError;
use crate::parse::types::LegacyBlock;

use super::rules::{apply_rules, BlockFields};

/// Convert one legacy block. The returned error carries no element identity;
/// `convert_flow_graph` attaches the block's position.
pub fn convert_block(block: &LegacyBlock) -> Result<Block, ConverterError> {
    let block_type = block.block_type().ok_or_else(|| {
        ConverterError::convert("C000", "Block is missing its <key> type identifier", None)
    })?;

    let mut params = collect_params(block);
    let mut states = States::default();
    apply_rules(&mut BlockFields {
        block_type,
        params: &mut params,
        states: &mut states,
    })?;

    let name = if block_type == OPTIONS_BLOCK {
        None
    } else {
        let name = params.remove("id").ok_or_else(|| {
            ConverterError::convert(
                "C001",
                format!("'{}' block has no 'id' parameter naming the instance", block_type),
                None,
            )
        })?;
        Some(name)
    };

    Ok(Block {
        name,
        id: Some(block_type.to_string()),
        parameters: params,
        states,
    })
}

/// Gather params sorted by key. A repeated key keeps its greatest value,
/// the one a sort over `(key, value)` pairs leaves last.
fn collect_params(block: &LegacyBlock) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for param in &block.params {
        let Some(key) = &param.key else {
            continue;
        };
        let dropped = match params.entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(param.value.clone());
                continue;
            }
            Entry::Occupied(mut slot) if param.value > *slot.get() => {
                slot.insert(param.value.clone())
            }
            Entry::Occupied(_) => param.value.clone(),
        };
        log::warn!(
            "'{}' block repeats param '{}'; dropping value '{}'",
            block.block_type().unwrap_or_default(),
            key,
            dropped
        );
    }
    params
}
