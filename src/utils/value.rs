use liquid::model::Value as LiquidValue;
use liquid::Object;
use serde_yaml::Value as YamlValue;

/// Convert a YAML value to its Liquid equivalent
pub fn yaml_to_liquid(yaml: &YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                LiquidValue::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => LiquidValue::scalar(s.clone()),
        YamlValue::Sequence(seq) => LiquidValue::Array(seq.iter().map(yaml_to_liquid).collect()),
        YamlValue::Mapping(map) => LiquidValue::Object(yaml_mapping_to_liquid(map)),
        YamlValue::Tagged(tagged) => yaml_to_liquid(&tagged.value),
    }
}

/// Convert a YAML mapping to a Liquid object; non-string keys use their scalar text
pub fn yaml_mapping_to_liquid(map: &serde_yaml::Mapping) -> Object {
    let mut obj = Object::new();
    for (k, v) in map {
        let key = yaml_scalar_to_string(k).unwrap_or_else(|| format!("{:?}", k));
        obj.insert(key.into(), yaml_to_liquid(v));
    }
    obj
}

/// String form of a scalar YAML value. Collections and null have none.
pub fn yaml_scalar_to_string(yaml: &YamlValue) -> Option<String> {
    match yaml {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Tagged(tagged) => yaml_scalar_to_string(&tagged.value),
        YamlValue::Null | YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}

/// Recursively merge `overlay` into `target`.
///
/// Nested objects merge key-wise. Any other value from `overlay` replaces
/// the value in `target`.
pub fn deep_merge(target: &mut Object, overlay: Object) {
    for (key, value) in overlay {
        if let LiquidValue::Object(incoming) = value {
            if let Some(LiquidValue::Object(existing)) = target.get_mut(key.as_str()) {
                deep_merge(existing, incoming);
                continue;
            }
            target.insert(key, LiquidValue::Object(incoming));
        } else {
            target.insert(key, value);
        }
    }
}
