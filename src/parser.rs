//! Scanners for the `var name = "value";` bodies returned by the camera CGIs.

use crate::constants::{TEMPERATURE_MARKER, TEMPERATURE_TERMINATOR};
use std::collections::HashMap;

pub type RawFieldMap = HashMap<String, String>;

const DECLARATION_PREFIX: &str = "var ";

/// Collects every `var <name> = <value>` line. Lines of any other shape are skipped.
pub fn parse_variables(text: &str) -> RawFieldMap {
    text.split('\n').filter_map(parse_declaration).collect()
}

fn parse_declaration(line: &str) -> Option<(String, String)> {
    let declaration = line.trim().strip_prefix(DECLARATION_PREFIX)?;
    let (name, value) = declaration.split_once('=')?;

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let value = value.trim_matches(|c| matches!(c, ' ' | '"' | '\'' | ';'));
    Some((name.to_string(), value.to_string()))
}

/// Extracts the number from `var temp="<value>";`.
pub fn parse_temperature(text: &str) -> Option<f64> {
    let (_, rest) = text.split_once(TEMPERATURE_MARKER)?;
    let value = match rest.split_once(TEMPERATURE_TERMINATOR) {
        Some((value, _)) => value,
        None => rest,
    };
    value.trim().parse().ok()
}
