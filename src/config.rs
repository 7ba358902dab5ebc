//! Caller-supplied conversion options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Force the `metadata.file_format` value instead of reading or guessing it.
    pub file_format: Option<u32>,
    /// Write the generated-file notice before the document body.
    pub header: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            file_format: None,
            header: true,
        }
    }
}
