//! Structural rules standing in for the legacy `flow_graph.dtd` (V002–V004).

use crate::error::ConverterError;
use crate::parse::types::LegacyFlowGraph;

/// Run all structural validation rules. Returns all errors found.
pub fn validate_structural(graph: &LegacyFlowGraph) -> Vec<ConverterError> {
    let mut errors = Vec::new();

    v002_blocks_have_key(graph, &mut errors);
    v003_params_have_key(graph, &mut errors);
    v004_connections_have_endpoints(graph, &mut errors);

    errors
}

fn v002_blocks_have_key(graph: &LegacyFlowGraph, errors: &mut Vec<ConverterError>) {
    for (i, block) in graph.blocks.iter().enumerate() {
        if block.block_type().is_none() {
            errors.push(ConverterError::validate(
                "V002",
                "Block is missing its <key> type identifier",
                Some(block.describe(i)),
            ));
        }
    }
}

fn v003_params_have_key(graph: &LegacyFlowGraph, errors: &mut Vec<ConverterError>) {
    for (i, block) in graph.blocks.iter().enumerate() {
        for (j, param) in block.params.iter().enumerate() {
            if param.key.is_none() {
                errors.push(ConverterError::validate(
                    "V003",
                    format!("Param #{} is missing its <key>", j),
                    Some(block.describe(i)),
                ));
            }
        }
    }
}

fn v004_connections_have_endpoints(graph: &LegacyFlowGraph, errors: &mut Vec<ConverterError>) {
    for (i, conn) in graph.connections.iter().enumerate() {
        let missing = conn.missing_endpoints();
        if !missing.is_empty() {
            errors.push(ConverterError::validate(
                "V004",
                format!("Connection is missing <{}>", missing.join(">, <")),
                Some(conn.describe(i)),
            ));
        }
    }
}
