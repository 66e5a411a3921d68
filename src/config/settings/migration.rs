// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::{Map, Value};

use crate::scoring::WeightConfiguration;

/// Sections written wholesale on save. Their absent keys mean "unset", so
/// merging them with the file would resurrect removed values.
const REPLACED_SECTIONS: [&str; 1] = ["host_overrides"];

/// Normalize hand-edited content before deserialization.
pub(super) fn migrate_on_load(mut value: Value) -> Value {
    let Some(root) = value.as_object_mut() else {
        return value;
    };
    match root.get_mut("weights") {
        Some(Value::Object(weights)) => sanitize_weights(weights),
        Some(other) if !other.is_null() => {
            tracing::warn!(value = %other, "Ignoring non-object weights section");
            root.remove("weights");
        }
        _ => {}
    }
    value
}

/// Drop weight entries that cannot deserialize so their defaults apply.
///
/// Non-numeric values are removed. `ignore_cores_above` written as `4.0`
/// becomes `4`; a fractional or out-of-range threshold is removed.
fn sanitize_weights(weights: &mut Map<String, Value>) {
    for key in WeightConfiguration::KEYS {
        let Some(entry) = weights.get(key) else {
            continue;
        };
        if !entry.is_number() {
            tracing::warn!(key, value = %entry, "Ignoring non-numeric weight, using default");
            weights.remove(key);
            continue;
        }
        if key == "ignore_cores_above" && entry.as_i64().is_none() {
            match whole_number(entry) {
                Some(threshold) => {
                    weights.insert(key.to_string(), Value::from(threshold));
                }
                None => {
                    tracing::warn!(key, value = %entry, "Ignoring non-integer weight, using default");
                    weights.remove(key);
                }
            }
        }
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    let number = value.as_f64()?;
    let in_range = number >= i64::MIN as f64 && number <= i64::MAX as f64;
    (number.is_finite() && number.fract() == 0.0 && in_range).then_some(number as i64)
}

/// Merge the serialized settings onto the existing file content.
pub(super) fn merge_settings(existing: Value, current: Value) -> Value {
    let mut merged = deep_merge(existing, current.clone());
    if let (Value::Object(merged_map), Value::Object(current_map)) = (&mut merged, current) {
        for section in REPLACED_SECTIONS {
            if let Some(value) = current_map.get(section) {
                merged_map.insert(section.to_string(), value.clone());
            }
        }
    }
    merged
}

/// Deep-merge two JSON values.
/// `base` is existing file content, `overlay` is serialized current struct.
/// Overlay values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_migrate_integral_float_threshold() {
        let migrated = migrate_on_load(json!({"weights": {"ignore_cores_above": 4.0}}));
        assert_eq!(migrated["weights"]["ignore_cores_above"], json!(4));
    }

    #[test]
    fn test_migrate_drops_fractional_threshold() {
        let migrated = migrate_on_load(json!({"weights": {"ignore_cores_above": 2.5}}));
        assert!(migrated["weights"].get("ignore_cores_above").is_none());
    }

    #[test]
    fn test_migrate_drops_non_numeric_weights() {
        let migrated = migrate_on_load(json!({
            "weights": {
                "shadow_penalty": "high",
                "ignore_cores_above": null,
                "compute_penalty": 0.4,
                "custom": "kept"
            }
        }));
        let weights = migrated["weights"].as_object().unwrap();
        assert!(!weights.contains_key("shadow_penalty"));
        assert!(!weights.contains_key("ignore_cores_above"));
        assert_eq!(weights["compute_penalty"], json!(0.4));
        assert_eq!(weights["custom"], json!("kept"));
    }

    #[test]
    fn test_migrate_drops_non_object_weights() {
        let migrated = migrate_on_load(json!({"weights": [1, 2], "use_extended_profile": true}));
        assert!(migrated.get("weights").is_none());
        assert_eq!(migrated["use_extended_profile"], json!(true));
    }

    #[test]
    fn test_migrate_without_weights() {
        let value = json!({"use_extended_profile": true});
        assert_eq!(migrate_on_load(value.clone()), value);
    }

    #[test]
    fn test_deep_merge_nested() {
        let base = json!({"a": {"x": 1, "y": 2}, "keep": true});
        let overlay = json!({"a": {"y": 3}});
        assert_eq!(
            deep_merge(base, overlay),
            json!({"a": {"x": 1, "y": 3}, "keep": true})
        );
    }

    #[test]
    fn test_merge_settings_replaces_overrides() {
        let existing = json!({"host_overrides": {"gpu_memory_mb": 1024, "gpu_vendor": "old"}});
        let current = json!({"host_overrides": {"gpu_memory_mb": 2048}});
        let merged = merge_settings(existing, current);
        assert_eq!(merged["host_overrides"], json!({"gpu_memory_mb": 2048}));
    }
}
