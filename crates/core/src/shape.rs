//! Shape descriptors.
//!
//! A [`Shape`] describes what a JSON value must look like. Shapes are plain
//! immutable data: build them once, share them freely.

use std::collections::HashMap;

use serde_json::Value;

use crate::transform::Direction;

/// Primitive JSON kinds a value can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    /// A string holding an RFC 3339 date-time or an ISO 8601 calendar date,
    /// or null. Numbers are never accepted as dates.
    Date,
    /// Anything, including absence.
    Any,
    Null,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Date => "date",
            Primitive::Any => "any",
            Primitive::Null => "null",
        }
    }
}

/// Expected shape of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Primitive(Primitive),
    /// A JSON array whose every element matches the inner shape.
    ArrayOf(Box<Shape>),
    /// The first candidate that matches wins; candidates are tried in order.
    UnionOf(Vec<Shape>),
    /// Either absent, or present and matching the inner shape. An explicit
    /// `null` counts as present.
    Optional(Box<Shape>),
    /// One of a fixed set of literal values.
    EnumOf(Vec<Value>),
    /// A named type resolved through the registry.
    Reference(String),
    ObjectOf(ObjectShape),
}

impl Shape {
    pub fn string() -> Shape {
        Shape::Primitive(Primitive::String)
    }

    pub fn number() -> Shape {
        Shape::Primitive(Primitive::Number)
    }

    pub fn boolean() -> Shape {
        Shape::Primitive(Primitive::Boolean)
    }

    pub fn date() -> Shape {
        Shape::Primitive(Primitive::Date)
    }

    pub fn any() -> Shape {
        Shape::Primitive(Primitive::Any)
    }

    pub fn null() -> Shape {
        Shape::Primitive(Primitive::Null)
    }

    pub fn array(element: Shape) -> Shape {
        Shape::ArrayOf(Box::new(element))
    }

    pub fn optional(inner: Shape) -> Shape {
        Shape::Optional(Box::new(inner))
    }

    pub fn union(candidates: Vec<Shape>) -> Shape {
        Shape::UnionOf(candidates)
    }

    pub fn literals(values: Vec<Value>) -> Shape {
        Shape::EnumOf(values)
    }

    pub fn reference(name: impl Into<String>) -> Shape {
        Shape::Reference(name.into())
    }

    /// Object with the given fields that rejects undeclared keys.
    pub fn object(fields: Vec<Field>) -> Shape {
        Shape::ObjectOf(ObjectShape::new(fields, Additional::Reject))
    }

    /// Human-readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Shape::Primitive(p) => p.name().to_string(),
            Shape::ArrayOf(element) => format!("array of {}", element.describe()),
            Shape::UnionOf(candidates) => format!(
                "one of [{}]",
                candidates
                    .iter()
                    .map(Shape::describe)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Shape::Optional(inner) => format!("an optional {}", inner.describe()),
            Shape::EnumOf(values) => format!(
                "one of [{}]",
                values
                    .iter()
                    .map(Value::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Shape::Reference(name) => name.clone(),
            Shape::ObjectOf(_) => "object".to_string(),
        }
    }

    /// Names of every type this shape references, without resolving them.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Shape::Primitive(_) | Shape::EnumOf(_) => {}
            Shape::ArrayOf(inner) | Shape::Optional(inner) => inner.collect_references(out),
            Shape::UnionOf(candidates) => {
                for c in candidates {
                    c.collect_references(out);
                }
            }
            Shape::Reference(name) => out.push(name),
            Shape::ObjectOf(obj) => {
                for field in &obj.fields {
                    field.shape.collect_references(out);
                }
                if let Additional::Accept(extra) = &obj.additional {
                    extra.collect_references(out);
                }
            }
        }
    }
}

/// Policy for keys an object does not declare.
#[derive(Debug, Clone, PartialEq)]
pub enum Additional {
    Reject,
    /// Accept extras that match the shape and copy them through under the
    /// same key.
    Accept(Box<Shape>),
}

/// One declared object field.
///
/// `external` is the key in the JSON wire form and `internal` the key in
/// the in-memory form. Decoding reads `external` and writes `internal`;
/// encoding does the opposite.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub external: String,
    pub internal: String,
    pub shape: Shape,
}

impl Field {
    /// A field whose key is the same on both sides.
    pub fn new(key: impl Into<String>, shape: Shape) -> Field {
        let key = key.into();
        Field {
            external: key.clone(),
            internal: key,
            shape,
        }
    }

    pub fn renamed(external: impl Into<String>, internal: impl Into<String>, shape: Shape) -> Field {
        Field {
            external: external.into(),
            internal: internal.into(),
            shape,
        }
    }

    /// Key read from the input in the given direction.
    pub fn source_key(&self, direction: Direction) -> &str {
        match direction {
            Direction::Decode => &self.external,
            Direction::Encode => &self.internal,
        }
    }

    /// Key written to the output in the given direction.
    pub fn target_key(&self, direction: Direction) -> &str {
        match direction {
            Direction::Decode => &self.internal,
            Direction::Encode => &self.external,
        }
    }
}

/// An object shape with its per-direction key tables.
///
/// Both lookup tables are computed once in [`ObjectShape::new`] and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectShape {
    fields: Vec<Field>,
    additional: Additional,
    by_external: HashMap<String, usize>,
    by_internal: HashMap<String, usize>,
}

impl ObjectShape {
    pub fn new(fields: Vec<Field>, additional: Additional) -> ObjectShape {
        let by_external = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.external.clone(), i))
            .collect();
        let by_internal = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.internal.clone(), i))
            .collect();
        ObjectShape {
            fields,
            additional,
            by_external,
            by_internal,
        }
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn additional(&self) -> &Additional {
        &self.additional
    }

    /// The declared field read from `source_key` in the given direction.
    pub fn field_for(&self, direction: Direction, source_key: &str) -> Option<&Field> {
        let table = match direction {
            Direction::Decode => &self.by_external,
            Direction::Encode => &self.by_internal,
        };
        table.get(source_key).map(|&i| &self.fields[i])
    }

    /// First key declared twice on either side, if any.
    pub(crate) fn duplicate_key(&self) -> Option<&str> {
        if self.by_external.len() == self.fields.len() && self.by_internal.len() == self.fields.len()
        {
            return None;
        }
        let mut seen_external = std::collections::HashSet::new();
        let mut seen_internal = std::collections::HashSet::new();
        for field in &self.fields {
            if !seen_external.insert(field.external.as_str()) {
                return Some(&field.external);
            }
            if !seen_internal.insert(field.internal.as_str()) {
                return Some(&field.internal);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describe_primitives_and_wrappers() {
        assert_eq!(Shape::string().describe(), "string");
        assert_eq!(Shape::array(Shape::number()).describe(), "array of number");
        assert_eq!(
            Shape::optional(Shape::reference("Flags")).describe(),
            "an optional Flags"
        );
        assert_eq!(
            Shape::union(vec![Shape::string(), Shape::null()]).describe(),
            "one of [string, null]"
        );
        assert_eq!(
            Shape::literals(vec![json!("north"), json!(3)]).describe(),
            "one of [\"north\", 3]"
        );
        assert_eq!(Shape::object(vec![]).describe(), "object");
    }

    #[test]
    fn renamed_field_keys_follow_direction() {
        let field = Field::renamed("alpha_2", "alpha2", Shape::string());
        assert_eq!(field.source_key(Direction::Decode), "alpha_2");
        assert_eq!(field.target_key(Direction::Decode), "alpha2");
        assert_eq!(field.source_key(Direction::Encode), "alpha2");
        assert_eq!(field.target_key(Direction::Encode), "alpha_2");
    }

    #[test]
    fn object_lookup_tables_per_direction() {
        let obj = ObjectShape::new(
            vec![
                Field::renamed("svg_url", "svg", Shape::string()),
                Field::new("png", Shape::string()),
            ],
            Additional::Reject,
        );
        assert!(obj.field_for(Direction::Decode, "svg_url").is_some());
        assert!(obj.field_for(Direction::Decode, "svg").is_none());
        assert!(obj.field_for(Direction::Encode, "svg").is_some());
        assert_eq!(
            obj.field_for(Direction::Encode, "png").map(|f| f.external.as_str()),
            Some("png")
        );
    }

    #[test]
    fn duplicate_key_detection() {
        let ok = ObjectShape::new(
            vec![Field::new("a", Shape::any()), Field::new("b", Shape::any())],
            Additional::Reject,
        );
        assert_eq!(ok.duplicate_key(), None);

        let dup = ObjectShape::new(
            vec![
                Field::new("a", Shape::any()),
                Field::renamed("b", "a", Shape::any()),
            ],
            Additional::Reject,
        );
        assert_eq!(dup.duplicate_key(), Some("a"));
    }

    #[test]
    fn references_are_collected_through_nesting() {
        let shape = Shape::object(vec![
            Field::new("flags", Shape::reference("Flags")),
            Field::new(
                "blocs",
                Shape::optional(Shape::array(Shape::reference("RegionalBloc"))),
            ),
        ]);
        assert_eq!(shape.references(), vec!["Flags", "RegionalBloc"]);
    }
}
