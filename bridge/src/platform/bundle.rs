use serde_json::Value;

/// String-keyed extras container attached to an intent.
///
/// Values pass through untyped; the bundle neither validates nor converts
/// them. Insertion order is kept, and re-putting a key overwrites in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    entries: Vec<(String, Value)>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Value)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_and_get_untyped_values() {
        let mut bundle = Bundle::new();
        bundle.put("id", json!("m-1"));
        bundle.put("count", json!(2));
        bundle.put("nested", json!({ "a": [1, 2] }));

        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.get("id"), Some(&json!("m-1")));
        assert_eq!(bundle.get("nested"), Some(&json!({ "a": [1, 2] })));
        assert!(bundle.get("missing").is_none());
    }

    #[test]
    fn test_put_overwrites_existing_key() {
        let mut bundle = Bundle::new();
        bundle.put("k", json!(1));
        bundle.put("k", json!(2));

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.get("k"), Some(&json!(2)));
    }
}
