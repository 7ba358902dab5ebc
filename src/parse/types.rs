//! Rust types mirroring the legacy `flow_graph.dtd` layout.
//!
//! These types are the serde target for the legacy XML flow graph.
//! Required children are kept optional here so that `validate` can report
//! them with the position of the offending element instead of a bare
//! deserializer message.

use serde::Deserialize;

// =============================================================================
// TOP-LEVEL FLOW GRAPH
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyFlowGraph {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(rename = "block", default)]
    pub blocks: Vec<LegacyBlock>,
    #[serde(rename = "connection", default)]
    pub connections: Vec<LegacyConnection>,
}

// =============================================================================
// BLOCKS
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyBlock {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(rename = "param", default)]
    pub params: Vec<LegacyParam>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyParam {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: String,
}

impl LegacyBlock {
    /// The block type identifier, when present and non-empty.
    pub fn block_type(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }

    /// Value of the first param with the given key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key.as_deref() == Some(key))
            .map(|p| p.value.as_str())
    }

    /// Human-readable identity used in error messages: `block[i] (name)`.
    pub fn describe(&self, index: usize) -> String {
        match self.param("id").or(self.block_type()) {
            Some(name) => format!("block[{}] ({})", index, name),
            None => format!("block[{}]", index),
        }
    }
}

// =============================================================================
// CONNECTIONS
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyConnection {
    #[serde(default)]
    pub source_block_id: Option<String>,
    #[serde(default)]
    pub sink_block_id: Option<String>,
    #[serde(default)]
    pub source_key: Option<String>,
    #[serde(default)]
    pub sink_key: Option<String>,
}

impl LegacyConnection {
    /// Names of the required endpoint children that are absent.
    pub fn missing_endpoints(&self) -> Vec<&'static str> {
        [
            ("source_block_id", &self.source_block_id),
            ("source_key", &self.source_key),
            ("sink_block_id", &self.sink_block_id),
            ("sink_key", &self.sink_key),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn describe(&self, index: usize) -> String {
        match (&self.source_block_id, &self.sink_block_id) {
            (Some(src), Some(snk)) => format!("connection[{}] ({} -> {})", index, src, snk),
            _ => format!("connection[{}]", index),
        }
    }
}
