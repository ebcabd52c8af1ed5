use crate::{
    config::ConfigPaths,
    fonts::{FontFamily, FontFeature},
};

use super::{DocsError, PropertyInfo, extract_property_info, preferences_schema};

const TABLE_HEADER: &str =
    "| Property | Type | Description | Default |\n|----------|------|-------------|---------|";

const FONT_TABLE_HEADER: &str =
    "| Family | Plain | Weights | Features |\n|--------|-------|---------|----------|";

/// Generates a markdown table documenting preference properties.
pub fn generate_property_table(
    section_title: &str,
    file_name: &str,
    properties: &[PropertyInfo],
) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let property_rows = properties
        .iter()
        .map(|prop| {
            format!(
                "| `{}` | `{}` | {} | `{}` |",
                prop.name, prop.type_name, prop.description, prop.default_value
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "## {}\n**File:** `{}`\n\n{}\n{}\n",
        section_title, file_name, TABLE_HEADER, property_rows
    )
}

/// Generates the preferences reference page.
///
/// # Errors
///
/// Returns `DocsError::SchemaConversion` if schema serialization fails.
pub fn generate_preferences_page() -> Result<String, DocsError> {
    let schema_value =
        serde_json::to_value(preferences_schema()).map_err(|e| DocsError::SchemaConversion {
            section: "preferences".to_string(),
            details: e.to_string(),
        })?;

    let properties = extract_property_info(&schema_value);
    let file_name = ConfigPaths::PREFERENCES_FILE;

    let mut content = String::from("# Preferences\n\n");
    content.push_str(
        "Every key is optional. A missing or invalid value falls back to its default \
         without affecting the other keys.\n\n",
    );
    content.push_str(&generate_property_table("Clock", file_name, &properties));
    content.push('\n');
    content.push_str(
        "Change a value from the command line with `padbury config set <key> <value>`; \
         a running `padbury screen run` picks the change up immediately.\n",
    );

    Ok(content)
}

/// Generates the font catalog page.
pub fn generate_fonts_page() -> String {
    let rows = FontFamily::ALL
        .iter()
        .map(|family| {
            let spec = family.spec();
            let weights = spec
                .weights
                .iter()
                .map(|weight| weight.name())
                .collect::<Vec<_>>()
                .join(", ");
            let features = spec
                .features
                .iter()
                .map(|feature| feature_label(*feature))
                .collect::<Vec<_>>()
                .join(", ");

            format!(
                "| {} | {} | {} | {} |",
                spec.name,
                if spec.plain { "yes" } else { "no" },
                weights,
                if features.is_empty() { "-" } else { features.as_str() },
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Fonts\n\nThe time is sized to span the full screen width. A weight the \
         selected family doesn't offer falls back to the family's first weight.\n\n{}\n{}\n",
        FONT_TABLE_HEADER, rows
    )
}

fn feature_label(feature: FontFeature) -> &'static str {
    match feature {
        FontFeature::MonospacedDigits => "monospaced digits",
        FontFeature::ProportionalNumbers => "proportional numbers",
        FontFeature::AlternatePunctuation => "alternate punctuation",
    }
}
