#![allow(dead_code)]

use grc_converter::document::FlowGraph;

// =============================================================================
// Legacy XML builders
// =============================================================================

/// Build a `<block>` element from its type and `(key, value)` params.
pub fn block_xml(key: &str, params: &[(&str, &str)]) -> String {
    let mut xml = format!("  <block>\n    <key>{}</key>\n", key);
    for (k, v) in params {
        xml.push_str(&format!(
            "    <param>\n      <key>{}</key>\n      <value>{}</value>\n    </param>\n",
            k, v
        ));
    }
    xml.push_str("  </block>\n");
    xml
}

/// Build a `<connection>` element from `[source, source_key, sink, sink_key]`.
pub fn connection_xml(endpoints: [&str; 4]) -> String {
    let [src, src_key, snk, snk_key] = endpoints;
    format!(
        "  <connection>\n    <source_block_id>{}</source_block_id>\n    <sink_block_id>{}</sink_block_id>\n    <source_key>{}</source_key>\n    <sink_key>{}</sink_key>\n  </connection>\n",
        src, snk, src_key, snk_key
    )
}

/// Wrap pre-built elements in a document, with an optional `format` tag.
pub fn flow_graph_xml(format: Option<&str>, elements: &[String]) -> String {
    let mut xml = String::from("<?xml version='1.0' encoding='utf-8'?>\n");
    if let Some(format) = format {
        xml.push_str(&format!("<?grc format='{}' created='3.7.13'?>\n", format));
    }
    xml.push_str("<flow_graph>\n");
    for element in elements {
        xml.push_str(element);
    }
    xml.push_str("</flow_graph>\n");
    xml
}

/// The options block every valid document needs.
pub fn options_xml() -> String {
    block_xml("options", &[("id", "top_block"), ("_coordinate", "(8, 8)")])
}

/// A document with the options block followed by the given elements.
pub fn with_options(format: Option<&str>, elements: &[String]) -> String {
    let mut all = vec![options_xml()];
    all.extend_from_slice(elements);
    flow_graph_xml(format, &all)
}

// =============================================================================
// Converted document lookups
// =============================================================================

pub fn block_named<'a>(graph: &'a FlowGraph, name: &str) -> &'a grc_converter::document::Block {
    graph
        .blocks
        .iter()
        .find(|b| b.name.as_deref() == Some(name))
        .unwrap_or_else(|| panic!("no block named '{}'", name))
}

pub fn param<'a>(block: &'a grc_converter::document::Block, key: &str) -> Option<&'a str> {
    block.parameters.get(key).map(String::as_str)
}
