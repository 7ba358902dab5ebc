//! Conversion phase: LegacyFlowGraph → FlowGraph.
//!
//! Blocks and connections are converted in document order; the `options`
//! block is pulled out of the block list and carried separately.

pub mod block;
pub mod connection;
pub mod format;
pub mod rules;

pub use block::convert_block;
pub use connection::convert_connection;
pub use format::{guess_file_format, resolve_file_format};

use std::path::Path;

use crate::document::{Block, FlowGraph, Metadata, OPTIONS_BLOCK};
use crate::error::ConverterError;
use crate::parse::{self, LegacyFlowGraph, VersionInfo};
use crate::validate;

/// Convert a parsed legacy flow graph. Metadata is left unset.
pub fn convert_flow_graph(legacy: &LegacyFlowGraph) -> Result<FlowGraph, Vec<ConverterError>> {
    let mut errors = Vec::new();

    // 1. Blocks, in document order. Options blocks are counted from the
    //    legacy type so a failed conversion does not hide them.
    let mut blocks = Vec::with_capacity(legacy.blocks.len());
    let mut options_at = Vec::new();
    for (i, raw) in legacy.blocks.iter().enumerate() {
        if raw.block_type() == Some(OPTIONS_BLOCK) {
            options_at.push(i);
        }
        match convert_block(raw) {
            Ok(block) => blocks.push(block),
            Err(mut e) => {
                e.element.get_or_insert_with(|| raw.describe(i));
                errors.push(e);
            }
        }
    }

    // 2. Exactly one options block
    let options = match options_at.as_slice() {
        [i] => Some(*i),
        [] => {
            errors.push(ConverterError::convert(
                "C005",
                "Flow graph has no 'options' block",
                None,
            ));
            None
        }
        many => {
            let found: Vec<String> = many
                .iter()
                .map(|i| legacy.blocks[*i].describe(*i))
                .collect();
            errors.push(ConverterError::convert(
                "C006",
                format!("Flow graph has {} 'options' blocks, expected 1", many.len()),
                Some(found.join(", ")),
            ));
            None
        }
    };

    // 3. Connections, in document order
    let mut connections = Vec::with_capacity(legacy.connections.len());
    for (i, raw) in legacy.connections.iter().enumerate() {
        match convert_connection(raw) {
            Ok(conn) => connections.push(conn),
            Err(mut e) => {
                e.element.get_or_insert_with(|| raw.describe(i));
                errors.push(e);
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    let Some(index) = options else {
        return Err(errors);
    };

    // 4. Assemble. With no errors every legacy block converted, so the
    //    legacy index is also the position in `blocks`.
    let options = into_options(blocks.remove(index));
    log::debug!(
        "converted flow graph: {} blocks, {} connections",
        blocks.len(),
        connections.len()
    );

    Ok(FlowGraph {
        options,
        blocks,
        connections,
        metadata: None,
    })
}

/// The options block carries only `parameters` and `states`.
fn into_options(block: Block) -> Block {
    Block {
        name: None,
        id: None,
        ..block
    }
}

/// Parse, validate, convert and tag an XML string with its file format.
pub fn from_xml_str(xml: &str) -> Result<FlowGraph, Vec<ConverterError>> {
    let (legacy, version) = parse::load_str(xml)?;
    from_legacy(&legacy, &version, None)
}

/// Load a legacy flow graph file and convert it.
pub fn from_xml(path: impl AsRef<Path>) -> Result<FlowGraph, Vec<ConverterError>> {
    let (legacy, version) = parse::load_file(path)?;
    from_legacy(&legacy, &version, None)
}

/// Validate, convert and attach metadata. `file_format` overrides the
/// version tag and the guess.
pub fn from_legacy(
    legacy: &LegacyFlowGraph,
    version: &VersionInfo,
    file_format: Option<u32>,
) -> Result<FlowGraph, Vec<ConverterError>> {
    let errors = validate::validate_flow_graph(legacy);
    if !errors.is_empty() {
        return Err(errors);
    }

    let mut graph = convert_flow_graph(legacy)?;
    let file_format = match file_format {
        Some(forced) => forced,
        None => resolve_file_format(version, &graph).map_err(|e| vec![e])?,
    };
    graph.metadata = Some(Metadata { file_format });
    Ok(graph)
}
