//! File format version resolution for converted flow graphs.

use crate::document::FlowGraph;
use crate::error::ConverterError;
use crate::parse::VersionInfo;

/// Indexed ports only (`'0'`, `'1'`, ...).
pub const FORMAT_INDEXED_PORTS: u32 = 0;
/// At least one named port (`'out'`, `'print'`, ...).
pub const FORMAT_NAMED_PORTS: u32 = 1;

/// Guess the format of a file written before version tagging existed.
///
/// Any connection with a non-digit source or sink port marks the newer
/// named-port convention. Typed connections always carry four string
/// fields, so there is no malformed shape to fall back from.
pub fn guess_file_format(graph: &FlowGraph) -> u32 {
    if graph.connections.iter().any(|c| !c.has_positional_ports()) {
        FORMAT_NAMED_PORTS
    } else {
        FORMAT_INDEXED_PORTS
    }
}

/// Use the `format` tag from the version PI, or guess when the tag is absent.
pub fn resolve_file_format(version: &VersionInfo, graph: &FlowGraph) -> Result<u32, ConverterError> {
    match version.format() {
        Some(raw) => raw.trim().parse().map_err(|_| {
            ConverterError::parse(
                "P005",
                format!("Version tag format='{}' is not an integer", raw),
            )
        }),
        None => {
            let guessed = guess_file_format(graph);
            log::debug!("no format tag in version PI, guessed file format {}", guessed);
            Ok(guessed)
        }
    }
}
