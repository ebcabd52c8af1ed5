//! Schema parsing and property extraction utilities for JSON Schema documents.

use schemars::{Schema, schema_for};
use serde_json::Value;

use crate::config::Preferences;

use super::DocsError;

/// Represents information about a single property in a JSON Schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    /// The name of the property as defined in the schema.
    pub name: String,
    /// The JSON Schema type of the property (e.g., "string", "boolean"),
    /// or the accepted values for enumerations.
    pub type_name: String,
    /// Human-readable description of the property's purpose and usage.
    pub description: String,
    /// String representation of the property's default value, or "-" if not specified.
    pub default_value: String,
}

/// JSON schema of the preference file.
pub fn preferences_schema() -> Schema {
    schema_for!(Preferences)
}

/// Pretty-printed JSON schema of the preference file.
///
/// # Errors
///
/// Returns `DocsError::SchemaConversion` if the schema cannot be serialized.
pub fn preferences_schema_json() -> Result<String, DocsError> {
    serde_json::to_string_pretty(&preferences_schema()).map_err(|e| DocsError::SchemaConversion {
        section: "preferences".to_string(),
        details: e.to_string(),
    })
}

/// Extracts property information from a JSON Schema document.
///
/// Properties referring to a definition (`$ref`) are resolved against the
/// schema's `$defs`. Properties keep the schema's declaration order.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use padbury::docs::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "show_seconds": {
///             "type": "boolean",
///             "description": "Show seconds after hours and minutes.",
///             "default": true
///         }
///     }
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "show_seconds");
/// assert_eq!(properties[0].type_name, "boolean");
/// assert_eq!(properties[0].default_value, "true");
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    schema
        .get("properties")
        .and_then(|props| props.as_object())
        .map(|props| build_properties(schema, props))
        .unwrap_or_default()
}

fn build_properties(root: &Value, props_obj: &serde_json::Map<String, Value>) -> Vec<PropertyInfo> {
    props_obj
        .iter()
        .map(|(name, property)| {
            let resolved = resolve_ref(root, property);
            PropertyInfo {
                name: name.clone(),
                type_name: get_type(resolved),
                description: get_description(property, resolved),
                default_value: get_default_value(property),
            }
        })
        .collect()
}

fn resolve_ref<'a>(root: &'a Value, property: &'a Value) -> &'a Value {
    property
        .get("$ref")
        .and_then(|reference| reference.as_str())
        .and_then(|reference| reference.strip_prefix("#/$defs/"))
        .and_then(|name| root.get("$defs").and_then(|defs| defs.get(name)))
        .unwrap_or(property)
}

fn get_type(property: &Value) -> String {
    if let Some(values) = enum_values(property) {
        return values.join(" \\| ");
    }

    property
        .get("type")
        .and_then(|type_of| type_of.as_str())
        .unwrap_or("unknown")
        .to_string()
}

fn enum_values(property: &Value) -> Option<Vec<String>> {
    if let Some(values) = property.get("enum").and_then(|values| values.as_array()) {
        return Some(values.iter().map(quoted).collect());
    }

    let variants = property.get("oneOf")?.as_array()?;
    let values: Vec<String> = variants
        .iter()
        .filter_map(|variant| variant.get("const").or_else(|| variant.get("enum")?.get(0)))
        .map(quoted)
        .collect();

    (!values.is_empty()).then_some(values)
}

fn quoted(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}

fn get_description(property: &Value, resolved: &Value) -> String {
    property
        .get("description")
        .or_else(|| resolved.get("description"))
        .and_then(|desc| desc.as_str())
        .unwrap_or("No description provided")
        .replace('\n', " ")
}

fn get_default_value(property: &Value) -> String {
    property
        .get("default")
        .map(|def_val| match def_val {
            Value::String(s) => format!("\"{s}\""),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            _ => def_val.to_string(),
        })
        .unwrap_or("-".to_string())
}
