//! Placeholder substitution for the embedded project templates.
//!
//! Two placeholder forms are supported: scalar `{{key}}` markers and list
//! blocks delimited by `{{#key}}` and `{{/key}}`. Substitution is literal
//! text replacement (split-and-rejoin), never regex and never recursive:
//! a replacement value that itself contains placeholder syntax is inserted
//! verbatim and left alone.

use std::collections::BTreeMap;

use crate::domain::AppError;

/// A value bound to a template key: a single scalar or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Scalar(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Scalar(value)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        TemplateValue::List(value)
    }
}

/// Ordered key-to-value bindings for one render call.
pub type TemplateData = BTreeMap<String, TemplateValue>;

/// How to treat template placeholders that have no matching data key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Unmatched placeholders remain as literal text in the output.
    #[default]
    Lenient,
    /// Any unmatched placeholder key fails with `MissingPlaceholder`.
    Strict,
}

/// Substitute `data` into `template`.
///
/// Scalar keys replace every `{{key}}` occurrence with the bound value.
/// List keys replace the whole `{{#key}}...{{/key}}` span with the list
/// elements joined by a single newline; the block body is discarded, and
/// placeholders inside it are never evaluated.
pub fn render(
    template: &str,
    data: &TemplateData,
    mode: RenderMode,
) -> Result<String, AppError> {
    if mode == RenderMode::Strict {
        for key in placeholder_keys(template) {
            if !data.contains_key(&key) {
                return Err(AppError::MissingPlaceholder(key));
            }
        }
    }

    let mut output = template.to_string();
    for (key, value) in data {
        match value {
            TemplateValue::Scalar(text) => {
                let marker = format!("{{{{{key}}}}}");
                output = output.split(marker.as_str()).collect::<Vec<_>>().join(text);
            }
            TemplateValue::List(items) => {
                output = expand_block(&output, key, items);
            }
        }
    }
    Ok(output)
}

/// Replace every `{{#key}}...{{/key}}` span with the joined list elements.
fn expand_block(input: &str, key: &str, items: &[String]) -> String {
    let open = format!("{{{{#{key}}}}}");
    let close = format!("{{{{/{key}}}}}");
    let joined = items.join("\n");

    let mut output = input.to_string();
    // Resume searching past the inserted text so a joined value containing
    // the open marker cannot re-trigger expansion.
    let mut from = 0;
    while let Some(found) = output[from..].find(&open) {
        let start = from + found;
        let Some(body) = output[start + open.len()..].find(&close) else {
            // Unmatched open marker; leave it as literal text.
            break;
        };
        let end = start + open.len() + body + close.len();
        output.replace_range(start..end, &joined);
        from = start + joined.len();
    }
    output
}

/// Collect the placeholder keys a template requires: scalar keys outside
/// block bodies plus the key of each block. Block bodies are skipped since
/// their content is discarded during expansion.
fn placeholder_keys(template: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let token = &after[..end];
        rest = &after[end + 2..];

        if let Some(block_key) = token.strip_prefix('#') {
            if !keys.contains(&block_key.to_string()) {
                keys.push(block_key.to_string());
            }
            // Skip the block body up to its close marker.
            let close = format!("{{{{/{block_key}}}}}");
            if let Some(close_at) = rest.find(&close) {
                rest = &rest[close_at + close.len()..];
            }
        } else if token.starts_with('/') {
            // Close marker without a preceding open; treated as literal.
        } else if !token.is_empty() && !keys.contains(&token.to_string()) {
            keys.push(token.to_string());
        }
    }
    keys
}
