//!
//! Canonical rule settings values. A normalized settings value is an ordered
//! sequence whose first element is the primary option and whose optional
//! second element is a plain object of secondary options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A normalized rule settings sequence: `[primary]` or `[primary, secondary]`.
///
/// Sequences that were already array-shaped in user configuration pass through
/// the normalizer verbatim, so a `RuleSettings` may occasionally hold more
/// than two elements (or none at all); `primary` and `secondary` are
/// positional accessors over whatever survived normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSettings(Vec<Value>);

impl RuleSettings {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// A one-element sequence: the value becomes the primary option.
    pub fn singleton(primary: Value) -> Self {
        Self(vec![primary])
    }

    /// The primary option, if the sequence is non-empty.
    pub fn primary(&self) -> Option<&Value> {
        self.0.first()
    }

    /// The second element of the sequence, whatever its shape.
    pub fn secondary(&self) -> Option<&Value> {
        self.0.get(1)
    }

    /// The secondary options, when present and shaped as a plain object.
    pub fn secondary_object(&self) -> Option<&Map<String, Value>> {
        self.secondary().and_then(Value::as_object)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Value>> for RuleSettings {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl IntoIterator for RuleSettings {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_singleton_accessors() {
        let settings = RuleSettings::singleton(json!("always"));
        assert_eq!(settings.primary(), Some(&json!("always")));
        assert_eq!(settings.secondary(), None);
        assert_eq!(settings.secondary_object(), None);
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_pair_accessors() {
        let settings = RuleSettings::new(vec![json!(2), json!({"ignore": ["comments"]})]);
        assert_eq!(settings.primary(), Some(&json!(2)));
        assert_eq!(settings.secondary(), Some(&json!({"ignore": ["comments"]})));
        let secondary = settings.secondary_object().expect("secondary should be an object");
        assert_eq!(secondary.get("ignore"), Some(&json!(["comments"])));
    }

    #[test]
    fn test_secondary_object_requires_plain_object() {
        let settings = RuleSettings::new(vec![json!("a"), json!(["b"])]);
        assert_eq!(settings.secondary(), Some(&json!(["b"])));
        assert_eq!(settings.secondary_object(), None);
    }

    #[test]
    fn test_empty_sequence() {
        let settings = RuleSettings::new(vec![]);
        assert!(settings.is_empty());
        assert_eq!(settings.primary(), None);
        assert_eq!(settings.secondary(), None);
    }

    #[test]
    fn test_transparent_serde() {
        let settings = RuleSettings::new(vec![json!("tab"), json!({"size": 4})]);
        let serialized = serde_json::to_value(&settings).unwrap();
        assert_eq!(serialized, json!(["tab", {"size": 4}]));

        let roundtripped: RuleSettings = serde_json::from_value(serialized).unwrap();
        assert_eq!(roundtripped, settings);
    }

    #[test]
    fn test_into_iterator() {
        let settings = RuleSettings::new(vec![json!(1), json!(2)]);
        let values: Vec<Value> = settings.into_iter().collect();
        assert_eq!(values, vec![json!(1), json!(2)]);
    }
}
