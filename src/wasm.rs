//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::config::ConvertOptions;
use crate::error::ConverterError;

/// Validate a legacy flow graph: parse + structural checks.
/// Returns a JSON array of ConverterError objects.
#[wasm_bindgen]
pub fn validate_flow_graph(xml: &str) -> JsValue {
    let result = validate_flow_graph_inner(xml);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_flow_graph_inner(xml: &str) -> Vec<ErrorDto> {
    let (legacy, _) = match crate::parse::load_str(xml) {
        Ok(loaded) => loaded,
        Err(errors) => return errors.into_iter().map(ErrorDto::from).collect(),
    };

    crate::validate::validate_flow_graph(&legacy)
        .into_iter()
        .map(ErrorDto::from)
        .collect()
}

/// Full pipeline: parse → validate → convert → emit.
/// Returns a JSON object with either `yaml` (success) or `errors` (failure).
#[wasm_bindgen]
pub fn convert_flow_graph(xml: &str) -> JsValue {
    let result = convert_flow_graph_inner(xml, &ConvertOptions::default());
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Same as `convert_flow_graph`, with a `ConvertOptions` object.
#[wasm_bindgen]
pub fn convert_flow_graph_with_options(xml: &str, options: JsValue) -> JsValue {
    let result = match options_from_js(options) {
        Ok(opts) => convert_flow_graph_inner(xml, &opts),
        Err(error) => ConvertResult::Errors {
            errors: vec![error],
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn options_from_js(options: JsValue) -> Result<ConvertOptions, ErrorDto> {
    if options.is_undefined() || options.is_null() {
        return Ok(ConvertOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| ErrorDto {
        code: "P006".into(),
        phase: "Parse".into(),
        message: format!("Failed to read conversion options: {}", e),
        element: None,
    })
}

fn convert_flow_graph_inner(xml: &str, options: &ConvertOptions) -> ConvertResult {
    match crate::convert_str_with(xml, options) {
        Ok(yaml) => ConvertResult::Success { yaml },
        Err(errors) => ConvertResult::Errors {
            errors: errors.into_iter().map(ErrorDto::from).collect(),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    element: Option<String>,
}

impl From<ConverterError> for ErrorDto {
    fn from(e: ConverterError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            element: e.element,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ConvertResult {
    #[serde(rename = "success")]
    Success { yaml: String },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
