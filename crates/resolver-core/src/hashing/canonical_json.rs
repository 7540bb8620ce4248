//! JSON canónico: claves de objetos ordenadas, sin espacios.
//!
//! Los arrays conservan su orden (el orden de los ids resueltos es parte de
//! la identidad de una resolución).

use serde_json::Value;
use std::collections::BTreeMap;

pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let tree: BTreeMap<&String, String> = map.iter().map(|(k, v)| (k, to_canonical_json(v))).collect();
            let items: Vec<String> = tree.into_iter().map(|(k, v)| format!("{}:{}", quote(k), v)).collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

// Serializar un &str a JSON no puede fallar; `Value::String` evita el unwrap.
fn quote(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sorts_keys_and_keeps_array_order() {
        let v = json!({"b": [3, 1], "a": {"z": null, "y": "q\"x"}});
        assert_eq!(to_canonical_json(&v), r#"{"a":{"y":"q\"x","z":null},"b":[3,1]}"#);
    }
}
