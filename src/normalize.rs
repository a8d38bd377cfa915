//!
//! Rule settings normalization. User configuration allows a rule's settings
//! to take a number of forms:
//!
//! a. `"rule-name": null`
//! b. `"rule-name": [null, ...]`
//! c. `"rule-name": primary`
//! d. `"rule-name": [primary]`
//! e. `"rule-name": [primary, secondary]`
//!
//! where `primary` can be anything: a scalar, an object, or an array. This
//! module collapses all of them into the standard `[primary, secondary]`
//! sequence, or `None` for the disabling forms a and b.

use serde_json::Value;

use crate::registry::RuleRegistry;
use crate::settings::RuleSettings;

/// Normalizes a raw rule settings value into canonical form.
///
/// When `primary_option_array` is supplied it is used as-is (an explicit
/// `Some(false)` wins over registry metadata); otherwise the flag is read
/// from the registry, and unknown rules count as `false`. Total over any
/// JSON value: no input shape is an error.
pub fn normalize_rule_settings(
    raw: &Value,
    rule_name: &str,
    primary_option_array: Option<bool>,
    registry: &RuleRegistry,
) -> Option<RuleSettings> {
    if raw.is_null() {
        return None;
    }

    let Value::Array(elements) = raw else {
        // Scalars and plain objects become the primary option as-is.
        return Some(RuleSettings::singleton(raw.clone()));
    };
    // Everything below is an array ...

    if elements.first().is_some_and(Value::is_null) {
        return None;
    }

    let primary_option_array = primary_option_array.unwrap_or_else(|| {
        let flag = registry.primary_option_array(rule_name);
        log::debug!("rule '{rule_name}': primary_option_array={flag} via registry");
        flag
    });

    if !primary_option_array {
        return Some(RuleSettings::new(elements.clone()));
    }
    // Everything below is a rule that CAN take an array for its primary
    // option (it might still be given something else, e.g. a keyword).

    if elements.len() == 1 && elements[0].is_array() {
        return Some(RuleSettings::new(elements.clone()));
    }

    if elements.len() == 2 && !elements[0].is_object() && elements[1].is_object() {
        return Some(RuleSettings::new(elements.clone()));
    }

    // No recognized canonical shape: the whole sequence is the primary option.
    Some(RuleSettings::singleton(raw.clone()))
}
