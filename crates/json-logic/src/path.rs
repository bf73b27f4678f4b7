//! Dot-separated data paths, as used by `var` and `missing`.

use crate::value::Value;

/// Splits a dot-separated path into segments. The empty path has no segments.
pub fn parse_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').collect()
}

/// Resolves `path` against `data`.
///
/// Returns `None` as soon as a segment cannot be followed: a missing key, an
/// index that is out of range or not a non-negative integer, or a scalar
/// reached before the path is exhausted.
pub fn get<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for segment in parse_path(path) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(arr) => {
                let idx: usize = segment.parse().ok()?;
                arr.get(idx)?
            }
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data() -> Value {
        Value::from(json!({
            "name": "John Doe",
            "address": {"street": "123 Main", "city": "Gotham", "zip": "33333"},
            "luckyNumbers": [3, 5, 7],
            "nested": [{"id": 1}, {"id": 2}],
            "nothing": null
        }))
    }

    #[test]
    fn empty_path_is_whole_document() {
        let d = data();
        assert_eq!(get(&d, ""), Some(&d));
        assert!(parse_path("").is_empty());
    }

    #[test]
    fn follows_keys_and_indices() {
        let d = data();
        assert_eq!(get(&d, "name"), Some(&Value::from("John Doe")));
        assert_eq!(get(&d, "address.zip"), Some(&Value::from("33333")));
        assert_eq!(get(&d, "luckyNumbers.1"), Some(&Value::from(5)));
        assert_eq!(get(&d, "nested.1.id"), Some(&Value::from(2)));
        assert_eq!(get(&d, "nothing"), Some(&Value::Null));
    }

    #[test]
    fn unresolvable_segments() {
        let d = data();
        assert_eq!(get(&d, "missing"), None);
        assert_eq!(get(&d, "luckyNumbers.3"), None);
        assert_eq!(get(&d, "luckyNumbers.-1"), None);
        assert_eq!(get(&d, "luckyNumbers.first"), None);
        assert_eq!(get(&d, "name.first"), None);
        assert_eq!(get(&d, "nothing.deeper"), None);
        assert_eq!(get(&d, "address."), None);
    }
}
