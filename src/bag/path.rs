use serde_json::{Map, Value};

/// Reads the value at a dotted path such as `"service.quantity"`.
///
/// Returns `None` when any segment is missing or an intermediate value is not an
/// object. A present JSON `null` is returned as `Some(&Value::Null)`, so callers can
/// tell "absent" from "explicitly null".
pub fn lookup<'a>(bag: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(bag, |current, segment| current.as_object()?.get(segment))
}

/// Resolves a field the way transition conditions see it: dotted path first, then a
/// direct top-level key. The fallback covers computed fields a caller pre-populates
/// under a literal key that happens to contain dots.
pub fn resolve<'a>(bag: &'a Value, field: &str) -> Option<&'a Value> {
    lookup(bag, field).or_else(|| bag.as_object()?.get(field))
}

/// Writes `value` at a dotted path, creating intermediate objects as needed.
///
/// A non-object value sitting where an intermediate object is required is replaced.
pub fn insert(bag: &mut Value, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = bag;
    while let Some(segment) = segments.next() {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Some(map) = current.as_object_mut() else {
            return;
        };
        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return;
        }
        current = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}
