//! Attribute resolution against a data context.
//!
//! Everything here fails soft: a missing attribute yields the caller's
//! default, an uncoercible boolean yields the default, and a binding that
//! cannot be resolved yields `None` (or the empty string once interpolated).
//! Nothing in this module returns an error or has side effects.
//!
//! # Binding syntax
//!
//! Attribute values may embed `{{ path }}` placeholders, where `path` is a
//! dotted key sequence (`user.roles.0.name`). Object members are looked up
//! by key, array elements by numeric index.

use serde_json::Value;

use crate::domain::{
    data::DataContext,
    markup::{Attributes, MarkupNode},
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Literal attribute value, or `default` when absent.
pub fn get(node: &MarkupNode, name: &str, default: &str) -> String {
    node.attribute(name).unwrap_or(default).to_string()
}

/// Boolean attribute with a fixed vocabulary.
///
/// `true`/`1`/`yes` and `false`/`0`/`no` (case-insensitive) are recognised;
/// an absent attribute or any other value yields `default`.
pub fn get_bool(node: &MarkupNode, name: &str, default: bool) -> bool {
    node.attribute(name)
        .and_then(parse_bool)
        .unwrap_or(default)
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Walk `path` segment by segment through the context.
pub fn resolve_binding<'a>(context: &'a DataContext, path: &str) -> Option<&'a Value> {
    let mut segments = split_path(path)?;
    let first = segments.next()?;
    let root = context.get(first)?;
    walk(root, segments)
}

/// Same walk as [`resolve_binding`], starting from an arbitrary value.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    walk(value, split_path(path)?)
}

fn split_path(path: &str) -> Option<std::str::Split<'_, char>> {
    let path = path.trim();
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return None;
    }
    Some(path.split('.'))
}

fn walk<'a, 'p>(mut current: &'a Value, segments: impl Iterator<Item = &'p str>) -> Option<&'a Value> {
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Text form of a resolved value as it appears in rendered output.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Loose truthiness used for data-driven flags.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => parse_bool(s).unwrap_or(!s.is_empty()),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// Replace every `{{ path }}` in `raw` with the resolved value's text.
///
/// Unresolvable paths become the empty string. An unterminated `{{` is kept
/// literally.
pub fn interpolate(raw: &str, context: &DataContext) -> String {
    if !raw.contains(OPEN) {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };
        if let Some(value) = resolve_binding(context, &after[..end]) {
            out.push_str(&value_to_text(value));
        }
        rest = &after[end + CLOSE.len()..];
    }
    out.push_str(rest);
    out
}

/// The node's attributes in document order, each value interpolated.
pub fn parsed_attributes(node: &MarkupNode, context: &DataContext) -> Attributes {
    node.attributes()
        .iter()
        .map(|(name, raw)| (name, interpolate(raw, context)))
        .collect()
}

/// Interpolated attribute value, or `None` when the attribute is absent.
pub fn get_parsed(node: &MarkupNode, name: &str, context: &DataContext) -> Option<String> {
    node.attribute(name).map(|raw| interpolate(raw, context))
}
