//! Tri-state value of a single form field

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Current value of a field.
///
/// `NotApplicable` is only reachable for fields whose descriptor carries a
/// not-applicable label. On the wire it is the boolean `false`, `Unset` is the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Unset,
    Present(String),
    NotApplicable,
}

impl FieldValue {
    /// `Present` for non-empty text, `Unset` otherwise
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::Unset
        } else {
            Self::Present(text)
        }
    }

    /// Text shown in the input; empty unless `Present`
    pub fn display(&self) -> &str {
        match self {
            Self::Present(text) => text,
            Self::Unset | Self::NotApplicable => "",
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_str(""),
            Self::Present(text) => serializer.serialize_str(text),
            Self::NotApplicable => serializer.serialize_bool(false),
        }
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or the boolean false")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<FieldValue, E> {
        if value {
            Err(E::invalid_value(de::Unexpected::Bool(true), &self))
        } else {
            Ok(FieldValue::NotApplicable)
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<FieldValue, E> {
        Ok(FieldValue::from_text(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<FieldValue, E> {
        Ok(FieldValue::from_text(value))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        assert_eq!(FieldValue::from_text(""), FieldValue::Unset);
        assert_eq!(
            FieldValue::from_text("Adidas"),
            FieldValue::Present("Adidas".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Unset.display(), "");
        assert_eq!(FieldValue::NotApplicable.display(), "");
        assert_eq!(FieldValue::Present("abc".into()).display(), "abc");
    }

    #[test]
    fn test_wire_shape() {
        let values = vec![
            FieldValue::Unset,
            FieldValue::Present("Nike".into()),
            FieldValue::NotApplicable,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["","Nike",false]"#);

        let parsed: Vec<FieldValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, values);
    }

    #[test]
    fn test_true_is_rejected() {
        assert!(serde_json::from_str::<FieldValue>("true").is_err());
        assert!(serde_json::from_str::<FieldValue>("12").is_err());
    }
}
