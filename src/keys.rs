use serde_json::Value;

/// Convert a wire key to camelCase. Keys without separators pass through
/// unchanged, which keeps the daemon's existing camelCase keys (including
/// oddballs like `isUTP`) intact.
fn camel_key(key: &str) -> String {
    if !key.contains(['-', '_']) {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '-' || ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Recursively convert every object key in `value` to camelCase.
///
/// The daemon mixes hyphenated, snake_case, and camelCase keys across
/// responses and nesting levels (file stats, tracker stats, peer records),
/// so the conversion has to walk objects inside arrays too.
pub(crate) fn camelize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camel_key(&key), camelize(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelize).collect()),
        other => other,
    }
}
