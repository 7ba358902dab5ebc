//! Emit pass: FlowGraph → YAML text.
//!
//! Public API: `dump(graph, stream)` and `dump_to_string(graph)`.

mod scalar;
mod writer;

use std::collections::BTreeMap;
use std::io::Write;

use crate::document::{Block, Coordinate, FlowGraph, States};
use crate::error::ConverterError;
use scalar::{flow_sequence, scalar, Context};
use writer::YamlWriter;

/// Generated-file notice written before the document body.
pub const HEADER: &str = "# auto-generated by grc.converter";

/// Serialize with the generated-file notice and write to `stream`.
pub fn dump(graph: &FlowGraph, mut stream: impl Write) -> Result<(), ConverterError> {
    stream
        .write_all(dump_to_string(graph).as_bytes())
        .map_err(|e| ConverterError::emit("E001", format!("Failed to write converted flow graph: {}", e)))
}

/// Serialize with the generated-file notice.
pub fn dump_to_string(graph: &FlowGraph) -> String {
    format!("{}\n\n{}", HEADER, to_yaml(graph))
}

/// Serialize the document body alone.
///
/// Top-level sections after `options` are separated by a blank line.
pub fn to_yaml(graph: &FlowGraph) -> String {
    let mut w = YamlWriter::new();

    // 1. OPTIONS
    w.mapping_open("options");
    emit_block_fields(&graph.options, &mut w);
    w.mapping_close();

    // 2. BLOCKS
    w.blank();
    if graph.blocks.is_empty() {
        w.line("blocks: []");
    } else {
        w.line("blocks:");
        for block in &graph.blocks {
            w.begin_item();
            emit_block_fields(block, &mut w);
            w.end_item();
        }
    }

    // 3. CONNECTIONS
    w.blank();
    if graph.connections.is_empty() {
        w.line("connections: []");
    } else {
        w.line("connections:");
        for conn in &graph.connections {
            w.line(&format!("- {}", flow_sequence(conn.as_array())));
        }
    }

    // 4. METADATA
    if let Some(metadata) = &graph.metadata {
        w.blank();
        w.mapping_open("metadata");
        w.line(&format!("file_format: {}", metadata.file_format));
        w.mapping_close();
    }

    w.finish()
}

fn emit_block_fields(block: &Block, w: &mut YamlWriter) {
    if let Some(name) = &block.name {
        w.line(&format!("name: {}", scalar(name, Context::Block)));
    }
    if let Some(id) = &block.id {
        w.line(&format!("id: {}", scalar(id, Context::Block)));
    }
    emit_parameters(&block.parameters, w);
    emit_states(&block.states, w);
}

fn emit_parameters(params: &BTreeMap<String, String>, w: &mut YamlWriter) {
    if params.is_empty() {
        w.line("parameters: {}");
        return;
    }
    w.mapping_open("parameters");
    for (key, value) in params {
        w.line(&format!(
            "{}: {}",
            scalar(key, Context::Block),
            scalar(value, Context::Block)
        ));
    }
    w.mapping_close();
}

fn emit_states(states: &States, w: &mut YamlWriter) {
    w.mapping_open("states");
    w.line(&format!("coordinate: {}", coordinate(&states.coordinate)));
    w.line(&format!("rotation: {}", states.rotation));
    w.line(&format!("state: {}", states.state.as_str()));
    w.mapping_close();
}

fn coordinate(c: &Coordinate) -> String {
    format!("[{}, {}]", c.x, c.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockState, Connection, Metadata, Number};

    fn options() -> Block {
        Block {
            name: None,
            id: None,
            parameters: BTreeMap::from([("id".to_string(), "top_block".to_string())]),
            states: States::default(),
        }
    }

    #[test]
    fn empty_sections() {
        let graph = FlowGraph {
            options: options(),
            blocks: vec![],
            connections: vec![],
            metadata: Some(Metadata { file_format: 1 }),
        };
        assert_eq!(
            dump_to_string(&graph),
            "# auto-generated by grc.converter\n\
             \n\
             options:\n\
             \x20 parameters:\n\
             \x20   id: top_block\n\
             \x20 states:\n\
             \x20   coordinate: [10, 10]\n\
             \x20   rotation: 0\n\
             \x20   state: enabled\n\
             \n\
             blocks: []\n\
             \n\
             connections: []\n\
             \n\
             metadata:\n\
             \x20 file_format: 1\n"
        );
    }

    #[test]
    fn block_items_and_connections() {
        let graph = FlowGraph {
            options: options(),
            blocks: vec![Block {
                name: Some("blocks_null_sink_0".into()),
                id: Some("blocks_null_sink".into()),
                parameters: BTreeMap::new(),
                states: States {
                    coordinate: Coordinate {
                        x: Number::Int(512),
                        y: Number::Float(96.5),
                    },
                    rotation: 90,
                    state: BlockState::Disabled,
                },
            }],
            connections: vec![Connection {
                source_block: "a_0".into(),
                source_port: "0".into(),
                sink_block: "blocks_null_sink_0".into(),
                sink_port: "0".into(),
            }],
            metadata: None,
        };
        let body = to_yaml(&graph);
        assert!(body.contains(
            "blocks:\n\
             - name: blocks_null_sink_0\n\
             \x20 id: blocks_null_sink\n\
             \x20 parameters: {}\n\
             \x20 states:\n\
             \x20   coordinate: [512, 96.5]\n\
             \x20   rotation: 90\n\
             \x20   state: disabled\n"
        ));
        assert!(body.contains("connections:\n- [a_0, '0', blocks_null_sink_0, '0']\n"));
        assert!(!body.contains("metadata"));
    }

    #[test]
    fn section_names_inside_values_are_untouched() {
        let mut opts = options();
        opts.parameters
            .insert("description".into(), "see blocks: below".into());
        let graph = FlowGraph {
            options: opts,
            blocks: vec![],
            connections: vec![],
            metadata: None,
        };
        let body = to_yaml(&graph);
        assert!(body.contains("    description: 'see blocks: below'\n"));
        assert_eq!(body.matches("\n\nblocks:").count(), 1);
    }

    #[test]
    fn dump_writes_to_stream() {
        let graph = FlowGraph {
            options: options(),
            blocks: vec![],
            connections: vec![],
            metadata: Some(Metadata { file_format: 0 }),
        };
        let mut out = Vec::new();
        dump(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# auto-generated by grc.converter\n\noptions:\n"));
        assert!(text.ends_with("metadata:\n  file_format: 0\n"));
    }
}
