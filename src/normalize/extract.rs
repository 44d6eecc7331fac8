use serde_json::Value;
use serde_json::map;
use std::slice;

/// Lazily walks `tree` and yields every value stored under `key`.
///
/// Traversal is depth-first pre-order: object entries in source order, array
/// elements in index order. A matching entry's value is yielded and not
/// searched further. The walk keeps its own stack, so deeply nested input
/// cannot exhaust the call stack.
pub fn extract<'a>(tree: &'a Value, key: &'a str) -> Extract<'a> {
    let mut stack = Vec::new();
    if let Some(frame) = Frame::of(tree) {
        stack.push(frame);
    }
    Extract { key, stack }
}

/// Iterator returned by [`extract`].
pub struct Extract<'a> {
    key: &'a str,
    stack: Vec<Frame<'a>>,
}

enum Frame<'a> {
    Object(map::Iter<'a>),
    Array(slice::Iter<'a, Value>),
}

impl<'a> Frame<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Frame::Object(map.iter())),
            Value::Array(items) => Some(Frame::Array(items.iter())),
            _ => None,
        }
    }
}

impl<'a> Iterator for Extract<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let child = match self.stack.last_mut()? {
                Frame::Object(entries) => match entries.next() {
                    Some((k, v)) if k == self.key => return Some(v),
                    Some((_, v)) => v,
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                Frame::Array(items) => match items.next() {
                    Some(v) => v,
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
            };

            if let Some(frame) = Frame::of(child) {
                self.stack.push(frame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_finds_nested_key() {
        let tree = json!({"league": {"standard": [1, 2], "africa": []}});
        let found: Vec<_> = extract(&tree, "standard").collect();
        assert_eq!(found, vec![&json!([1, 2])]);
    }

    #[test]
    fn test_extract_depth_first_pre_order() {
        let tree = json!({
            "a": {"id": 1, "inner": {"id": 2}},
            "list": [{"id": 3}, {"deeper": [{"id": 4}]}],
            "id": 5
        });
        let found: Vec<_> = extract(&tree, "id").cloned().collect();
        assert_eq!(found, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
    }

    #[test]
    fn test_extract_does_not_descend_into_match() {
        let tree = json!({"k": {"k": "inner"}});
        let found: Vec<_> = extract(&tree, "k").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], &json!({"k": "inner"}));
    }

    #[test]
    fn test_extract_missing_key_is_empty() {
        let tree = json!({"a": [1, {"b": null}]});
        assert_eq!(extract(&tree, "zzz").count(), 0);
        assert_eq!(extract(&json!("scalar"), "a").count(), 0);
    }

    #[test]
    fn test_extract_survives_deep_nesting() {
        let mut tree = json!({"target": true});
        for _ in 0..5_000 {
            tree = Value::Array(vec![tree]);
        }
        assert_eq!(extract(&tree, "target").next(), Some(&json!(true)));
        // Dropping a deeply nested Value recurses; leak it to keep the test about extraction.
        std::mem::forget(tree);
    }

    #[test]
    fn test_extract_is_lazy() {
        let tree = json!([{"x": 1}, {"x": 2}, {"x": 3}]);
        let mut iter = extract(&tree, "x");
        assert_eq!(iter.next(), Some(&json!(1)));
        assert_eq!(iter.next(), Some(&json!(2)));
    }
}
