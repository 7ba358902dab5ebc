//! Legacy `<connection>` → target `Connection`.

use crate::document::Connection;
use crate::error::ConverterError;
use crate::parse::types::LegacyConnection;

/// Convert one legacy connection. Port ids pass through as strings, even
/// digit-only ones; numeric coercion of positional ports is not performed.
pub fn convert_connection(conn: &LegacyConnection) -> Result<Connection, ConverterError> {
    let missing = conn.missing_endpoints();
    if !missing.is_empty() {
        return Err(ConverterError::convert(
            "C007",
            format!("Connection is missing <{}>", missing.join(">, <")),
            None,
        ));
    }

    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    Ok(Connection {
        source_block: field(&conn.source_block_id),
        source_port: field(&conn.source_key),
        sink_block: field(&conn.sink_block_id),
        sink_port: field(&conn.sink_key),
    })
}
