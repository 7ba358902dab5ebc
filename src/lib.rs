pub mod config;
pub mod convert;
pub mod document;
pub mod emit;
pub mod error;
pub mod parse;
pub mod validate;
pub mod wasm;

use config::ConvertOptions;
use error::ConverterError;

/// Full pipeline: parse → validate → convert → emit, with default options.
pub fn convert_str(xml: &str) -> Result<String, Vec<ConverterError>> {
    convert_str_with(xml, &ConvertOptions::default())
}

/// Full pipeline honoring caller options.
pub fn convert_str_with(xml: &str, options: &ConvertOptions) -> Result<String, Vec<ConverterError>> {
    let (legacy, version) = parse::load_str(xml)?;
    let graph = convert::from_legacy(&legacy, &version, options.file_format)?;
    Ok(if options.header {
        emit::dump_to_string(&graph)
    } else {
        emit::to_yaml(&graph)
    })
}
