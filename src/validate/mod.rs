//! Document-level validation phase (pre-conversion).
//!
//! Checks the deserialized legacy document for the required children the
//! legacy DTD demands, before any conversion rule runs.

pub mod structural;

use crate::error::ConverterError;
use crate::parse::types::LegacyFlowGraph;

/// Validate the entire legacy flow graph.
pub fn validate_flow_graph(graph: &LegacyFlowGraph) -> Vec<ConverterError> {
    structural::validate_structural(graph)
}
