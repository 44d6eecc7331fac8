use serde_json::{Map, Value};

/// Copies the allowlisted fields present in `row`, in allowlist order.
///
/// Absent fields are left out rather than defaulted; the record normalizers
/// supply defaults.
#[must_use]
pub fn project(row: &Map<String, Value>, allowlist: &[&str]) -> Map<String, Value> {
    allowlist
        .iter()
        .filter_map(|&name| row.get(name).map(|value| (name.to_string(), value.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_project_keeps_allowlisted_fields_only() {
        let row = as_map(json!({"personId": "1", "points": "30", "secret": "x"}));
        let projected = project(&row, &["personId", "points"]);
        assert_eq!(Value::Object(projected), json!({"personId": "1", "points": "30"}));
    }

    #[test]
    fn test_project_omits_missing_fields() {
        let row = as_map(json!({"personId": "1"}));
        let projected = project(&row, &["personId", "teamId", "points"]);
        assert_eq!(projected.len(), 1);
        assert!(!projected.contains_key("teamId"));
    }

    #[test]
    fn test_project_uses_allowlist_order() {
        let row = as_map(json!({"c": 3, "a": 1, "b": 2}));
        let projected = project(&row, &["b", "c", "a"]);
        let keys: Vec<_> = projected.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_project_output_is_subset_of_allowlist_and_input() {
        let row = as_map(json!({"a": 1, "b": 2, "z": 26}));
        let allowlist = ["a", "b", "c"];
        let projected = project(&row, &allowlist);
        for key in projected.keys() {
            assert!(allowlist.contains(&key.as_str()));
            assert!(row.contains_key(key));
        }
    }
}
