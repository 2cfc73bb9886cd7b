/// A value did not match the shape it was cast against.
///
/// The first violation aborts the whole cast; there is never more than one
/// error per call and never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    /// Wrong JSON kind, bad literal, or missing required value.
    #[error("invalid value{}: expected {expected} but got {actual}", location(.key, .parent))]
    InvalidValue {
        /// Source key of the offending field, if the value sits under one.
        key: Option<String>,
        /// Name of the enclosing record type, if it was reached by reference.
        parent: Option<String>,
        /// Description of the expected shape (see [`crate::Shape::describe`]).
        expected: String,
        /// The actual value as compact JSON, `undefined` when absent.
        actual: String,
    },

    /// An object carried a key its shape does not declare and the
    /// additional-properties policy rejects extras.
    #[error("unknown key \"{key}\"{}", on_parent(.parent))]
    UnknownKey { key: String, parent: Option<String> },

    /// A reference named a type missing from the registry.
    #[error("unknown type \"{name}\"")]
    UnknownType { name: String },
}

impl CastError {
    /// Source key the error points at, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            CastError::InvalidValue { key, .. } => key.as_deref(),
            CastError::UnknownKey { key, .. } => Some(key),
            CastError::UnknownType { .. } => None,
        }
    }

    /// Record type the error occurred in, if any.
    pub fn parent(&self) -> Option<&str> {
        match self {
            CastError::InvalidValue { parent, .. } | CastError::UnknownKey { parent, .. } => {
                parent.as_deref()
            }
            CastError::UnknownType { .. } => None,
        }
    }
}

fn location(key: &Option<String>, parent: &Option<String>) -> String {
    let mut text = String::new();
    if let Some(key) = key {
        text.push_str(&format!(" for key \"{}\"", key));
    }
    text.push_str(&on_parent(parent));
    text
}

fn on_parent(parent: &Option<String>) -> String {
    match parent {
        Some(parent) => format!(" on {}", parent),
        None => String::new(),
    }
}

/// A type registry could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("type \"{name}\" is registered twice")]
    DuplicateType { name: String },

    #[error("type \"{from}\" references unregistered type \"{name}\"")]
    DanglingReference { from: String, name: String },

    #[error("type \"{type_name}\" declares key \"{key}\" more than once")]
    DuplicateField { type_name: String, key: String },

    /// A type that reaches itself through references, unions or optionals
    /// without passing through an array or object.
    #[error("type \"{name}\" refers to itself without an enclosing array or object")]
    ReferenceCycle { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_message_with_key_and_parent() {
        let err = CastError::InvalidValue {
            key: Some("alpha2Code".to_string()),
            parent: Some("Country".to_string()),
            expected: "string".to_string(),
            actual: "12".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for key \"alpha2Code\" on Country: expected string but got 12"
        );
        assert_eq!(err.key(), Some("alpha2Code"));
        assert_eq!(err.parent(), Some("Country"));
    }

    #[test]
    fn invalid_value_message_at_top_level() {
        let err = CastError::InvalidValue {
            key: None,
            parent: None,
            expected: "array of Country".to_string(),
            actual: "{}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value: expected array of Country but got {}"
        );
        assert_eq!(err.key(), None);
    }

    #[test]
    fn unknown_key_message() {
        let err = CastError::UnknownKey {
            key: "motto".to_string(),
            parent: Some("Country".to_string()),
        };
        assert_eq!(err.to_string(), "unknown key \"motto\" on Country");
    }

    #[test]
    fn registry_error_messages() {
        let err = RegistryError::DanglingReference {
            from: "Country".to_string(),
            name: "Flag".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "type \"Country\" references unregistered type \"Flag\""
        );
    }
}
