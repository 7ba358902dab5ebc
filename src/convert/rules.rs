//! Declarative field-mapping rules from legacy block params to the new
//! `parameters` / `states` layout.
//!
//! Each rule pairs a block-type predicate with a transform. Rules run in
//! table order over the sorted param map, so a later rule sees the result of
//! an earlier one.

use std::collections::BTreeMap;

use crate::document::{BlockState, Coordinate, Number, States};
use crate::error::ConverterError;

/// Mutable view of a block while its rules are applied.
pub struct BlockFields<'a> {
    pub block_type: &'a str,
    pub params: &'a mut BTreeMap<String, String>,
    pub states: &'a mut States,
}

pub struct BlockRule {
    pub name: &'static str,
    pub applies: fn(block_type: &str) -> bool,
    pub apply: fn(fields: &mut BlockFields<'_>) -> Result<(), ConverterError>,
}

pub const BLOCK_RULES: &[BlockRule] = &[
    BlockRule {
        name: "import-renamed-to-imports",
        applies: is_import_block,
        apply: rename_import,
    },
    BlockRule {
        name: "coordinate-to-states",
        applies: any_block,
        apply: take_coordinate,
    },
    BlockRule {
        name: "rotation-to-states",
        applies: any_block,
        apply: take_rotation,
    },
    BlockRule {
        name: "enabled-to-states",
        applies: any_block,
        apply: take_enabled,
    },
];

/// Run every applicable rule against one block.
pub fn apply_rules(fields: &mut BlockFields<'_>) -> Result<(), ConverterError> {
    for rule in BLOCK_RULES {
        if (rule.applies)(fields.block_type) {
            log::trace!("applying rule '{}' to '{}' block", rule.name, fields.block_type);
            (rule.apply)(fields)?;
        }
    }
    Ok(())
}

fn any_block(_: &str) -> bool {
    true
}

fn is_import_block(block_type: &str) -> bool {
    block_type == "import"
}

fn rename_import(fields: &mut BlockFields<'_>) -> Result<(), ConverterError> {
    let value = fields.params.remove("import").ok_or_else(|| {
        ConverterError::convert("C004", "Import block has no 'import' parameter", None)
    })?;
    fields.params.insert("imports".into(), value);
    Ok(())
}

fn take_coordinate(fields: &mut BlockFields<'_>) -> Result<(), ConverterError> {
    if let Some(raw) = fields.params.remove("_coordinate") {
        fields.states.coordinate = parse_coordinate(&raw).ok_or_else(|| {
            ConverterError::convert(
                "C002",
                format!("Cannot read '_coordinate' value '{}' as an (x, y) pair", raw),
                None,
            )
        })?;
    }
    Ok(())
}

fn take_rotation(fields: &mut BlockFields<'_>) -> Result<(), ConverterError> {
    if let Some(raw) = fields.params.remove("_rotation") {
        fields.states.rotation = raw.trim().parse().map_err(|_| {
            ConverterError::convert(
                "C003",
                format!("Cannot read '_rotation' value '{}' as an integer", raw),
                None,
            )
        })?;
    }
    Ok(())
}

fn take_enabled(fields: &mut BlockFields<'_>) -> Result<(), ConverterError> {
    let raw = fields
        .params
        .remove("_enabled")
        .unwrap_or_else(|| "True".to_string());
    fields.states.state = BlockState::from_legacy(&raw);
    Ok(())
}

/// Read a literal 2-tuple such as `(232, 157)` or `[1.5, -2]`.
pub fn parse_coordinate(raw: &str) -> Option<Coordinate> {
    let raw = raw.trim();
    let inner = raw
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .or_else(|| raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')))?;

    let mut parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    // A single trailing comma is legal literal syntax.
    if parts.len() == 3 && parts[2].is_empty() {
        parts.pop();
    }
    match parts.as_slice() {
        [x, y] => Some(Coordinate {
            x: parse_number(x)?,
            y: parse_number(y)?,
        }),
        _ => None,
    }
}

fn parse_number(raw: &str) -> Option<Number> {
    if raw.is_empty()
        || !raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    // An integer literal stays an integer; one that overflows is rejected.
    if raw.trim_start_matches(['+', '-']).bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse::<i64>().ok().map(Number::Int);
    }
    raw.parse::<f64>().ok().map(Number::Float)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(block_type: &str, params: &[(&str, &str)]) -> Result<(BTreeMap<String, String>, States), ConverterError> {
        let mut params: BTreeMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut states = States::default();
        apply_rules(&mut BlockFields {
            block_type,
            params: &mut params,
            states: &mut states,
        })?;
        Ok((params, states))
    }

    #[test]
    fn layout_params_move_to_states() {
        let (params, states) = run(
            "blocks_throttle",
            &[
                ("_coordinate", "(232, 157)"),
                ("_rotation", "180"),
                ("_enabled", "2"),
                ("samples_per_second", "samp_rate"),
            ],
        )
        .unwrap();
        assert_eq!(params.len(), 1);
        assert!(params.contains_key("samples_per_second"));
        assert_eq!(states.coordinate.x, Number::Int(232));
        assert_eq!(states.coordinate.y, Number::Int(157));
        assert_eq!(states.rotation, 180);
        assert_eq!(states.state, BlockState::Bypassed);
    }

    #[test]
    fn defaults_when_layout_is_absent() {
        let (_, states) = run("blocks_null_sink", &[]).unwrap();
        assert_eq!(states, States::default());
        assert_eq!(states.state, BlockState::Enabled);
    }

    #[test]
    fn import_param_is_renamed() {
        let (params, _) = run("import", &[("import", "os,sys")]).unwrap();
        assert_eq!(params.get("imports").map(String::as_str), Some("os,sys"));
        assert!(!params.contains_key("import"));
    }

    #[test]
    fn import_param_kept_on_other_blocks() {
        let (params, _) = run("epy_block", &[("import", "numpy")]).unwrap();
        assert!(params.contains_key("import"));
        assert!(!params.contains_key("imports"));
    }

    #[test]
    fn import_block_without_import_param_fails() {
        let err = run("import", &[]).unwrap_err();
        assert_eq!(err.code, "C004");
    }

    #[test]
    fn bad_rotation_fails() {
        let err = run("blocks_add_xx", &[("_rotation", "ninety")]).unwrap_err();
        assert_eq!(err.code, "C003");
    }

    #[test]
    fn bad_coordinate_fails() {
        let err = run("blocks_add_xx", &[("_coordinate", "(1, 2, 3)")]).unwrap_err();
        assert_eq!(err.code, "C002");
    }

    #[test]
    fn coordinate_literal_forms() {
        let c = parse_coordinate("(8, 8)").unwrap();
        assert_eq!((c.x, c.y), (Number::Int(8), Number::Int(8)));

        let c = parse_coordinate("[ -16 , 40 ]").unwrap();
        assert_eq!((c.x, c.y), (Number::Int(-16), Number::Int(40)));

        let c = parse_coordinate("(1.5, 2,)").unwrap();
        assert_eq!((c.x, c.y), (Number::Float(1.5), Number::Int(2)));

        assert!(parse_coordinate("8, 8").is_none());
        assert!(parse_coordinate("(8)").is_none());
        assert!(parse_coordinate("(x, 8)").is_none());
        assert!(parse_coordinate("(inf, 8)").is_none());
        assert!(parse_coordinate("").is_none());
    }

    #[test]
    fn oversized_integer_coordinate_is_rejected() {
        assert!(parse_coordinate("(99999999999999999999, 1)").is_none());
        let err = run("blocks_add_xx", &[("_coordinate", "(99999999999999999999, 1)")]).unwrap_err();
        assert_eq!(err.code, "C002");

        let c = parse_coordinate("(1e20, 1)").unwrap();
        assert_eq!(c.x, Number::Float(1e20));
    }
}
