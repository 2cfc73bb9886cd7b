//! Immutable name-to-shape table.

use std::collections::{HashMap, HashSet};

use crate::error::RegistryError;
use crate::shape::{Additional, Primitive, Shape};

/// Closed table of named shapes.
///
/// Construction checks that names are unique, that every reference resolves,
/// that no object declares a key twice and that no name reaches itself again
/// without first passing through an array or object. A registry that exists
/// is therefore safe to cast against: lookups made while walking its shapes
/// always succeed and every walk consumes input as it recurses.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: Vec<(String, Shape)>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new<I, S>(entries: I) -> Result<TypeRegistry, RegistryError>
    where
        I: IntoIterator<Item = (S, Shape)>,
        S: Into<String>,
    {
        let mut registry = TypeRegistry {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (name, shape) in entries {
            let name = name.into();
            if registry.index.contains_key(&name) {
                return Err(RegistryError::DuplicateType { name });
            }
            registry.index.insert(name.clone(), registry.entries.len());
            registry.entries.push((name, shape));
        }
        registry.validate()?;
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Shape)> {
        self.entries.iter().map(|(name, shape)| (name.as_str(), shape))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a missing value satisfies `shape`.
    ///
    /// True for optional shapes, `any`, unions with such a candidate, and
    /// references to any of those.
    pub fn accepts_absence(&self, shape: &Shape) -> bool {
        match shape {
            Shape::Optional(_) => true,
            Shape::Primitive(p) => *p == Primitive::Any,
            Shape::UnionOf(candidates) => candidates.iter().any(|c| self.accepts_absence(c)),
            Shape::Reference(name) => self
                .get(name)
                .is_some_and(|resolved| self.accepts_absence(resolved)),
            Shape::ArrayOf(_) | Shape::EnumOf(_) | Shape::ObjectOf(_) => false,
        }
    }

    fn validate(&self) -> Result<(), RegistryError> {
        for (name, shape) in &self.entries {
            for target in shape.references() {
                if !self.contains(target) {
                    return Err(RegistryError::DanglingReference {
                        from: name.clone(),
                        name: target.to_string(),
                    });
                }
            }
            check_fields(name, shape)?;
            self.check_unguarded_cycle(name)?;
        }
        Ok(())
    }

    /// Reject `start` if it can reach itself through references, unions and
    /// optionals alone. Arrays and objects guard recursion because walking
    /// them descends into the value.
    fn check_unguarded_cycle(&self, start: &str) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        let mut pending = Vec::new();
        if let Some(shape) = self.get(start) {
            unguarded_references(shape, &mut pending);
        }
        while let Some(current) = pending.pop() {
            if current == start {
                return Err(RegistryError::ReferenceCycle {
                    name: start.to_string(),
                });
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(shape) = self.get(current) {
                unguarded_references(shape, &mut pending);
            }
        }
        Ok(())
    }
}

/// References reachable from `shape` without entering an array or object.
fn unguarded_references<'a>(shape: &'a Shape, out: &mut Vec<&'a str>) {
    match shape {
        Shape::Reference(name) => out.push(name),
        Shape::Optional(inner) => unguarded_references(inner, out),
        Shape::UnionOf(candidates) => {
            for candidate in candidates {
                unguarded_references(candidate, out);
            }
        }
        Shape::Primitive(_) | Shape::EnumOf(_) | Shape::ArrayOf(_) | Shape::ObjectOf(_) => {}
    }
}

fn check_fields(type_name: &str, shape: &Shape) -> Result<(), RegistryError> {
    match shape {
        Shape::Primitive(_) | Shape::EnumOf(_) | Shape::Reference(_) => Ok(()),
        Shape::ArrayOf(inner) | Shape::Optional(inner) => check_fields(type_name, inner),
        Shape::UnionOf(candidates) => candidates
            .iter()
            .try_for_each(|c| check_fields(type_name, c)),
        Shape::ObjectOf(obj) => {
            if let Some(key) = obj.duplicate_key() {
                return Err(RegistryError::DuplicateField {
                    type_name: type_name.to_string(),
                    key: key.to_string(),
                });
            }
            for field in obj.fields() {
                check_fields(type_name, &field.shape)?;
            }
            match obj.additional() {
                Additional::Accept(extra) => check_fields(type_name, extra),
                Additional::Reject => Ok(()),
            }
        }
    }
}
