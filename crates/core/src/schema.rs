//! JSON Schema export.
//!
//! Renders a registry as a draft 2020-12 document with one `$defs` entry
//! per registered type. The schema describes the external (wire) form, so
//! object properties use external keys.

use serde_json::{json, Map, Value};

use crate::registry::TypeRegistry;
use crate::shape::{Additional, Primitive, Shape};

pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Schema document whose root validates `root` against `registry`.
pub fn to_json_schema(registry: &TypeRegistry, root: &Shape) -> Value {
    let mut defs = Map::new();
    for (name, shape) in registry.iter() {
        defs.insert(name.to_string(), shape_schema(registry, shape));
    }

    let mut doc = Map::new();
    doc.insert("$schema".to_string(), json!(DRAFT_2020_12));
    if let Value::Object(root_schema) = shape_schema(registry, root) {
        doc.extend(root_schema);
    }
    doc.insert("$defs".to_string(), Value::Object(defs));
    Value::Object(doc)
}

/// Schema document for a single registered type, `None` if unknown.
pub fn type_schema(registry: &TypeRegistry, name: &str) -> Option<Value> {
    registry
        .contains(name)
        .then(|| to_json_schema(registry, &Shape::reference(name)))
}

fn shape_schema(registry: &TypeRegistry, shape: &Shape) -> Value {
    match shape {
        Shape::Primitive(kind) => match kind {
            Primitive::String => json!({"type": "string"}),
            Primitive::Number => json!({"type": "number"}),
            Primitive::Boolean => json!({"type": "boolean"}),
            Primitive::Null => json!({"type": "null"}),
            Primitive::Any => json!({}),
            Primitive::Date => json!({
                "anyOf": [
                    {"type": "string", "format": "date-time"},
                    {"type": "string", "format": "date"},
                    {"type": "null"}
                ]
            }),
        },
        Shape::ArrayOf(element) => json!({
            "type": "array",
            "items": shape_schema(registry, element),
        }),
        Shape::UnionOf(candidates) => json!({
            "anyOf": candidates
                .iter()
                .map(|c| shape_schema(registry, c))
                .collect::<Vec<_>>(),
        }),
        // Absence is expressed by leaving the property out of `required`.
        Shape::Optional(inner) => shape_schema(registry, inner),
        Shape::EnumOf(values) => json!({ "enum": values }),
        Shape::Reference(name) => json!({ "$ref": format!("#/$defs/{}", name) }),
        Shape::ObjectOf(obj) => {
            let mut properties = Map::new();
            let mut required = Vec::new();
            for field in obj.fields() {
                properties.insert(field.external.clone(), shape_schema(registry, &field.shape));
                if !registry.accepts_absence(&field.shape) {
                    required.push(Value::String(field.external.clone()));
                }
            }
            let additional = match obj.additional() {
                Additional::Reject => Value::Bool(false),
                Additional::Accept(extra) => shape_schema(registry, extra),
            };
            json!({
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": additional,
            })
        }
    }
}
