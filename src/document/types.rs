//! Target document model: the ordered `options` / `blocks` / `connections` /
//! `metadata` mapping written out by `emit`.
//!
//! Field declaration order is the emitted key order.

use std::collections::BTreeMap;

// =============================================================================
// TOP-LEVEL DOCUMENT
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FlowGraph {
    /// Graph-level settings taken from the legacy `options` block.
    pub options: Block,
    pub blocks: Vec<Block>,
    pub connections: Vec<Connection>,
    /// Unset until the file format version has been resolved.
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub file_format: u32,
}

// =============================================================================
// BLOCKS
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Instance name; `None` for the options block.
    pub name: Option<String>,
    /// Block type identifier; `None` once extracted as the options block.
    pub id: Option<String>,
    /// Sorted ascending by key.
    pub parameters: BTreeMap<String, String>,
    pub states: States,
}

/// Type identifier of the block carrying graph-level settings.
pub const OPTIONS_BLOCK: &str = "options";

#[derive(Debug, Clone, PartialEq)]
pub struct States {
    pub coordinate: Coordinate,
    pub rotation: i64,
    pub state: BlockState,
}

impl Default for States {
    fn default() -> Self {
        States {
            coordinate: Coordinate::default(),
            rotation: 0,
            state: BlockState::Enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: Number,
    pub y: Number,
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate {
            x: Number::Int(10),
            y: Number::Int(10),
        }
    }
}

/// A numeric literal that keeps the type it was written with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) if v.is_nan() => write!(f, ".nan"),
            Number::Float(v) if v.is_infinite() => {
                write!(f, "{}", if *v > 0.0 { ".inf" } else { "-.inf" })
            }
            // Keep a fractional part so the value reads back as a float.
            Number::Float(v) if v.fract() == 0.0 => write!(f, "{:.1}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Enabled,
    Bypassed,
    Disabled,
}

impl BlockState {
    /// Map the legacy `_enabled` encoding onto the new tri-state label.
    pub fn from_legacy(raw: &str) -> Self {
        match raw {
            "1" | "True" => BlockState::Enabled,
            "2" => BlockState::Bypassed,
            _ => BlockState::Disabled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockState::Enabled => "enabled",
            BlockState::Bypassed => "bypassed",
            BlockState::Disabled => "disabled",
        }
    }
}

// =============================================================================
// CONNECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source_block: String,
    pub source_port: String,
    pub sink_block: String,
    pub sink_port: String,
}

impl Connection {
    /// Fields in emitted order.
    pub fn as_array(&self) -> [&str; 4] {
        [
            &self.source_block,
            &self.source_port,
            &self.sink_block,
            &self.sink_port,
        ]
    }

    /// True when both ports use the indexed (digit-only) port convention.
    pub fn has_positional_ports(&self) -> bool {
        is_positional_port(&self.source_port) && is_positional_port(&self.sink_port)
    }
}

/// A port id made only of ASCII digits; the empty id is not positional.
pub fn is_positional_port(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}
