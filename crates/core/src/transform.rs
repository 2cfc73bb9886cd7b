//! The validate-and-rekey pass.
//!
//! [`transform`] walks a JSON value against a [`Shape`], checking every
//! node and renaming object keys according to the [`Direction`]. It either
//! returns a complete new value or the first [`CastError`] it meets.

use serde_json::{Map, Value};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::CastError;
use crate::registry::TypeRegistry;
use crate::shape::{Additional, ObjectShape, Primitive, Shape};

/// Which side of each field descriptor is read and which is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// External (wire) keys in, internal keys out.
    Decode,
    /// Internal keys in, external (wire) keys out.
    Encode,
}

/// Validate `value` against `shape` and re-key it for `direction`.
///
/// `None` as input means the value is absent (a missing object key);
/// `None` as output means the target key should be left unset.
pub fn transform(
    registry: &TypeRegistry,
    value: Option<&Value>,
    shape: &Shape,
    direction: Direction,
) -> Result<Option<Value>, CastError> {
    Transformer {
        registry,
        direction,
    }
    .field(value, shape, &TOP_LEVEL)
}

/// Decode a present value: external keys to internal keys.
pub fn cast(registry: &TypeRegistry, value: &Value, shape: &Shape) -> Result<Value, CastError> {
    Transformer {
        registry,
        direction: Direction::Decode,
    }
    .present(value, shape, &TOP_LEVEL)
}

/// Encode a present value: internal keys to external keys.
pub fn uncast(registry: &TypeRegistry, value: &Value, shape: &Shape) -> Result<Value, CastError> {
    Transformer {
        registry,
        direction: Direction::Encode,
    }
    .present(value, shape, &TOP_LEVEL)
}

/// Where in the document a value sits, for error reporting.
struct Site<'a> {
    key: Option<&'a str>,
    parent: Option<&'a str>,
}

const TOP_LEVEL: Site<'static> = Site {
    key: None,
    parent: None,
};

impl Site<'_> {
    fn invalid(&self, expected: &Shape, actual: Option<&Value>) -> CastError {
        self.invalid_described(expected.describe(), actual)
    }

    fn invalid_described(&self, expected: String, actual: Option<&Value>) -> CastError {
        CastError::InvalidValue {
            key: self.key.map(str::to_string),
            parent: self.parent.map(str::to_string),
            expected,
            actual: actual.map_or_else(|| "undefined".to_string(), Value::to_string),
        }
    }
}

struct Transformer<'r> {
    registry: &'r TypeRegistry,
    direction: Direction,
}

impl Transformer<'_> {
    /// A value that may be absent.
    fn field(
        &self,
        value: Option<&Value>,
        shape: &Shape,
        site: &Site<'_>,
    ) -> Result<Option<Value>, CastError> {
        match value {
            Some(value) => self.present(value, shape, site).map(Some),
            None if self.registry.accepts_absence(shape) => Ok(None),
            None => Err(site.invalid(shape, None)),
        }
    }

    fn present(&self, value: &Value, shape: &Shape, site: &Site<'_>) -> Result<Value, CastError> {
        match shape {
            Shape::Primitive(kind) => self.primitive(*kind, value, shape, site),
            Shape::ArrayOf(element) => {
                let items = value
                    .as_array()
                    .ok_or_else(|| site.invalid(shape, Some(value)))?;
                items
                    .iter()
                    .map(|item| self.present(item, element, site))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }
            Shape::UnionOf(candidates) => candidates
                .iter()
                .find_map(|candidate| self.present(value, candidate, site).ok())
                .ok_or_else(|| site.invalid(shape, Some(value))),
            Shape::Optional(inner) => self.present(value, inner, site),
            Shape::EnumOf(literals) => {
                if literals.contains(value) {
                    Ok(value.clone())
                } else {
                    Err(site.invalid(shape, Some(value)))
                }
            }
            Shape::Reference(name) => {
                let resolved = self
                    .registry
                    .get(name)
                    .ok_or_else(|| CastError::UnknownType { name: name.clone() })?;
                match resolved {
                    Shape::ObjectOf(obj) => self.object(value, obj, Some(name), site),
                    other => self.present(value, other, site),
                }
            }
            Shape::ObjectOf(obj) => self.object(value, obj, None, site),
        }
    }

    fn primitive(
        &self,
        kind: Primitive,
        value: &Value,
        shape: &Shape,
        site: &Site<'_>,
    ) -> Result<Value, CastError> {
        let ok = match kind {
            Primitive::String => value.is_string(),
            Primitive::Number => value.is_number(),
            Primitive::Boolean => value.is_boolean(),
            Primitive::Null => value.is_null(),
            Primitive::Any => true,
            Primitive::Date => match value {
                Value::Null => true,
                Value::String(text) => parses_as_date(text),
                _ => false,
            },
        };
        if ok {
            Ok(value.clone())
        } else {
            Err(site.invalid(shape, Some(value)))
        }
    }

    /// `record` is the registry name the object was reached through; it
    /// becomes the parent of every error raised inside the object.
    fn object(
        &self,
        value: &Value,
        obj: &ObjectShape,
        record: Option<&str>,
        site: &Site<'_>,
    ) -> Result<Value, CastError> {
        let map = match value.as_object() {
            Some(map) => map,
            None => {
                let expected = record.unwrap_or("object").to_string();
                return Err(site.invalid_described(expected, Some(value)));
            }
        };

        let mut out = Map::with_capacity(map.len());
        for field in obj.fields() {
            let source = field.source_key(self.direction);
            let inner = Site {
                key: Some(source),
                parent: record,
            };
            if let Some(v) = self.field(map.get(source), &field.shape, &inner)? {
                out.insert(field.target_key(self.direction).to_string(), v);
            }
        }

        for (key, v) in map {
            if obj.field_for(self.direction, key).is_some() {
                continue;
            }
            match obj.additional() {
                Additional::Reject => {
                    return Err(CastError::UnknownKey {
                        key: key.clone(),
                        parent: record.map(str::to_string),
                    });
                }
                Additional::Accept(extra) => {
                    let inner = Site {
                        key: Some(key),
                        parent: record,
                    };
                    out.insert(key.clone(), self.present(v, extra, &inner)?);
                }
            }
        }

        Ok(Value::Object(out))
    }
}

/// RFC 3339 date-time or a plain `YYYY-MM-DD` calendar date.
fn parses_as_date(text: &str) -> bool {
    OffsetDateTime::parse(text, &Rfc3339).is_ok()
        || Date::parse(text, format_description!("[year]-[month]-[day]")).is_ok()
}
