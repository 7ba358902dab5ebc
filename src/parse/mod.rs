//! Parse phase: legacy XML → Rust types + version metadata.

pub mod types;
pub mod version;

pub use types::*;
pub use version::VersionInfo;

use std::path::Path;

use crate::error::{ConverterError, LoadError};

/// Expected name of the legacy document root.
pub const ROOT_ELEMENT: &str = "flow_graph";

/// Deserialize a legacy flow graph XML string together with its version PI.
pub fn load_str(xml: &str) -> Result<(LegacyFlowGraph, VersionInfo), Vec<ConverterError>> {
    let prolog = version::scan_prolog(xml).map_err(|e| vec![e.into()])?;

    match prolog.root.as_deref() {
        Some(ROOT_ELEMENT) => {}
        Some(other) => {
            return Err(vec![ConverterError::parse(
                "P004",
                format!("Expected root element <{}>, found <{}>", ROOT_ELEMENT, other),
            )]);
        }
        None => {
            return Err(vec![ConverterError::parse(
                "P004",
                format!("Document has no root element, expected <{}>", ROOT_ELEMENT),
            )]);
        }
    }

    let graph = quick_xml::de::from_str::<LegacyFlowGraph>(xml)
        .map_err(|e| vec![LoadError::from(e).into()])?;

    log::debug!(
        "loaded legacy flow graph: {} blocks, {} connections, format tag {:?}",
        graph.blocks.len(),
        graph.connections.len(),
        prolog.version.format()
    );

    Ok((graph, prolog.version))
}

/// Read and deserialize a legacy flow graph file.
pub fn load_file(path: impl AsRef<Path>) -> Result<(LegacyFlowGraph, VersionInfo), Vec<ConverterError>> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path).map_err(|e| {
        let mut err = ConverterError::from(LoadError::from(e));
        err.element = Some(path.display().to_string());
        vec![err]
    })?;
    load_str(&xml)
}
