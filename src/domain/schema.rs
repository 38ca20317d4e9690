//! Diary export schema
//!
//! The shape of an export is declared with a handful of composable builders
//! ([`string`], [`number`], [`nullable`], [`array`], [`tuple`], [`object`])
//! that emit an inline JSON Schema (draft 2020-12). The `jsonschema` crate
//! does the structural checking; this module turns its errors into
//! [`Issue`]s that name the offending field, the expected constraint and
//! what was found.
//!
//! The schema is never split with `$ref`, so every error's schema location
//! resolves directly against the compiled document.

use crate::domain::document::OmataDiaryDocument;
use crate::domain::issue::{Issue, IssuePath, PathSegment, SchemaValidationError};
use crate::domain::policy::UnknownKeys;
use crate::error::{Result, ValidateError};
use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, ValidationError, Validator};
use serde::Deserialize;
use serde_json::{json, Map, Value};

const UNKNOWN_KEY_EXPECTATION: &str = "no unrecognized keys";

pub fn string() -> Value {
    json!({ "type": "string" })
}

pub fn number() -> Value {
    json!({ "type": "number" })
}

/// Accept `null` in addition to whatever `inner` accepts
pub fn nullable(mut inner: Value) -> Value {
    if let Some(Value::String(kind)) = inner.get("type").cloned() {
        inner["type"] = json!([kind, "null"]);
    }
    inner
}

pub fn array(items: Value) -> Value {
    json!({ "type": "array", "items": items })
}

/// Fixed-length array with positionally typed elements
pub fn tuple(items: Vec<Value>) -> Value {
    let len = items.len();
    json!({
        "type": "array",
        "prefixItems": items,
        "minItems": len,
        "maxItems": len,
    })
}

/// Object whose declared fields are all required
pub fn object(fields: Vec<(&str, Value)>, unknown_keys: UnknownKeys) -> Value {
    let required: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    let properties: Map<String, Value> = fields
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();

    let mut schema = json!({
        "type": "object",
        "properties": properties,
        "required": required,
    });
    if unknown_keys.is_strict() {
        schema["additionalProperties"] = json!(false);
    }
    schema
}

fn diary_text_line(keys: UnknownKeys) -> Value {
    object(
        vec![
            ("text", string()),
            ("line", number()),
            ("filename", string()),
        ],
        keys,
    )
}

fn diary_image(keys: UnknownKeys) -> Value {
    object(
        vec![
            ("type", string()),
            ("image_data", string()),
            ("line_start", number()),
            ("line_end", number()),
            ("size_bytes", number()),
            ("filename", string()),
        ],
        keys,
    )
}

fn diary_entry(keys: UnknownKeys) -> Value {
    object(
        vec![
            ("dateline", string()),
            ("dateline_line", number()),
            ("filename", string()),
            ("text", array(diary_text_line(keys))),
            ("images", array(diary_image(keys))),
        ],
        keys,
    )
}

fn metadata(keys: UnknownKeys) -> Value {
    object(
        vec![
            ("num_entries", number()),
            ("line_range", tuple(vec![number(), number()])),
            ("total_images", number()),
            ("total_words", number()),
            ("total_image_bytes", number()),
            ("first_entry", nullable(string())),
            ("last_entry", nullable(string())),
        ],
        keys,
    )
}

/// Build the JSON Schema for a whole diary export
pub fn omata_diary_schema(keys: UnknownKeys) -> Value {
    let mut schema = object(
        vec![
            ("metadata", metadata(keys)),
            ("entries", array(diary_entry(keys))),
        ],
        keys,
    );
    schema["$schema"] = json!("https://json-schema.org/draft/2020-12/schema");
    schema["title"] = json!("OmataDiaryDocument");
    schema
}

/// Compiled diary schema
pub struct DiarySchema {
    schema: Value,
    validator: Validator,
    unknown_keys: UnknownKeys,
}

impl DiarySchema {
    /// Compile the diary schema under the given unknown-key policy
    pub fn new(unknown_keys: UnknownKeys) -> Result<Self> {
        let schema = omata_diary_schema(unknown_keys);

        let mut opts = jsonschema::options();
        opts.with_draft(Draft::Draft202012);
        let validator = opts
            .build(&schema)
            .map_err(|e| ValidateError::SchemaBuild(e.to_string()))?;

        Ok(DiarySchema {
            schema,
            validator,
            unknown_keys,
        })
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.unknown_keys
    }

    /// The JSON Schema document this validator was compiled from
    pub fn to_json(&self) -> &Value {
        &self.schema
    }

    /// Check `instance` and return it as a typed document.
    ///
    /// Every violation in the tree is collected; a failure never stops at
    /// the first bad field.
    pub fn validate(
        &self,
        instance: &Value,
    ) -> std::result::Result<OmataDiaryDocument, SchemaValidationError> {
        let issues: Vec<Issue> = self
            .validator
            .iter_errors(instance)
            .flat_map(|error| self.issues_for(&error, instance))
            .collect();

        if let Some(err) = SchemaValidationError::from_issues(issues) {
            tracing::debug!(issues = err.issues().len(), "schema rejected document");
            return Err(err);
        }

        OmataDiaryDocument::deserialize(instance).map_err(|e| {
            SchemaValidationError::single(Issue::new(
                IssuePath::root(),
                "OmataDiaryDocument",
                e.to_string(),
            ))
        })
    }

    fn issues_for(&self, error: &ValidationError<'_>, instance: &Value) -> Vec<Issue> {
        let instance_pointer = error.instance_path.to_string();
        let schema_pointer = error.schema_path.to_string();
        let path = path_from_pointer(instance, &instance_pointer);
        let actual = instance.pointer(&instance_pointer);

        match &error.kind {
            ValidationErrorKind::Required { property } => {
                let name = property
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| property.to_string());
                let field_pointer = format!(
                    "{}/properties/{}",
                    parent_pointer(&schema_pointer),
                    escape_pointer_token(&name)
                );
                let expected = self
                    .schema
                    .pointer(&field_pointer)
                    .map(describe_schema)
                    .unwrap_or_else(|| "a value".to_string());
                vec![Issue::new(path.key(name), expected, "missing")]
            }
            ValidationErrorKind::AdditionalProperties { unexpected } => unexpected
                .iter()
                .map(|key| {
                    let value = actual.and_then(|v| v.get(key));
                    Issue::new(
                        path.key(key.clone()),
                        UNKNOWN_KEY_EXPECTATION,
                        describe_value(value),
                    )
                })
                .collect(),
            _ => {
                let keyword = schema_pointer.rsplit('/').next().unwrap_or_default();
                let constraint = self.schema.pointer(&schema_pointer);
                let expected = match (keyword, constraint) {
                    ("type", Some(types)) => describe_type(types),
                    ("minItems", Some(limit)) => format!("at least {} items", limit),
                    ("maxItems", Some(limit)) => format!("at most {} items", limit),
                    _ => error.to_string(),
                };
                let received = match (keyword, actual) {
                    ("minItems" | "maxItems", Some(Value::Array(items))) => {
                        describe_length(items.len())
                    }
                    _ => describe_value(actual),
                };
                vec![Issue::new(path, expected, received)]
            }
        }
    }
}

/// Turn a JSON pointer into a path, using `instance` to tell array indices
/// apart from object keys that happen to be numeric.
fn path_from_pointer(instance: &Value, pointer: &str) -> IssuePath {
    let mut segments = Vec::new();
    let mut current = Some(instance);

    for token in pointer.split('/').skip(1) {
        let token = unescape_pointer_token(token);
        match current {
            Some(Value::Array(items)) => match token.parse::<usize>() {
                Ok(index) => {
                    current = items.get(index);
                    segments.push(PathSegment::Index(index));
                }
                Err(_) => {
                    current = None;
                    segments.push(PathSegment::Key(token));
                }
            },
            Some(Value::Object(map)) => {
                current = map.get(&token);
                segments.push(PathSegment::Key(token));
            }
            _ => {
                current = None;
                segments.push(PathSegment::Key(token));
            }
        }
    }

    IssuePath::new(segments)
}

fn parent_pointer(pointer: &str) -> &str {
    pointer.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}

fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn unescape_pointer_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Render the expectation a sub-schema places on its value
fn describe_schema(schema: &Value) -> String {
    if let Some(Value::Array(items)) = schema.get("prefixItems") {
        let inner: Vec<String> = items.iter().map(describe_schema).collect();
        return format!("[{}]", inner.join(", "));
    }
    schema
        .get("type")
        .map(describe_type)
        .unwrap_or_else(|| "a value".to_string())
}

fn describe_type(types: &Value) -> String {
    match types {
        Value::String(kind) => kind.clone(),
        Value::Array(kinds) => kinds
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        other => other.to_string(),
    }
}

fn describe_length(len: usize) -> String {
    match len {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}

/// Name the JSON type of a value, or `missing` when there is none
pub fn describe_value(value: Option<&Value>) -> String {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
    .to_string()
}
