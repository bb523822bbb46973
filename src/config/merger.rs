//! Layering of YAML configuration values.
//!
//! `.stowage/config.local.yml` is laid over `.stowage/config.yml`:
//!
//! - Mappings merge key by key, recursively
//! - Sequences and scalars in the overlay replace the base value
//! - A `null` in the overlay removes the key

use serde_yaml::Value;

/// Lay `overlay` over `base` in place.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    base_map.remove(&key);
                } else if let Some(existing) = base_map.get_mut(&key) {
                    merge_into(existing, value);
                } else {
                    base_map.insert(key, value);
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Merge layers in order (later layers win). Empty files parse as
/// `null` and are skipped.
pub fn merge_layers(layers: Vec<Value>) -> Value {
    let mut merged = Value::Mapping(Default::default());
    for layer in layers.into_iter().filter(|l| !l.is_null()) {
        merge_into(&mut merged, layer);
    }
    merged
}
