use std::collections::HashMap;

/// Insertion-ordered map from package name to a value.
///
/// Both lookups by name and iteration order matter for load lists, so the
/// names are kept in a `Vec` alongside a `HashMap` for the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadMap<V> {
    order: Vec<String>,
    values: HashMap<String, V>,
}

impl<V> Default for WadMap<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            values: HashMap::new(),
        }
    }
}

impl<V> WadMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.values.get(name)
    }

    /// Insert or overwrite. An overwritten name keeps its position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        let previous = self.values.insert(name.clone(), value);
        if previous.is_none() {
            self.order.push(name);
        }
        previous
    }

    pub fn remove(&mut self, name: &str) -> Option<V> {
        let value = self.values.remove(name)?;
        self.order.retain(|n| n != name);
        Some(value)
    }

    /// Names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Values in iteration order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|name| self.values.get(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.order
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v)))
    }

    /// Insert every entry of `other` in its order, overwriting on collision.
    pub fn extend(&mut self, other: WadMap<V>) {
        for (name, value) in other {
            self.insert(name, value);
        }
    }
}

impl<V> IntoIterator for WadMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.order
            .into_iter()
            .filter_map(|name| self.values.remove(&name).map(|v| (name, v)))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for WadMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = WadMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let map: WadMap<u32> = [("c.wad", 1), ("a.wad", 2), ("b.wad", 3)]
            .into_iter()
            .collect();

        assert_eq!(map.names().collect::<Vec<_>>(), ["c.wad", "a.wad", "b.wad"]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = WadMap::new();
        map.insert("a.wad", 1);
        map.insert("b.wad", 2);

        assert_eq!(map.insert("a.wad", 10), Some(1));
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            [("a.wad", &10), ("b.wad", &2)]
        );
    }

    #[test]
    fn test_remove_then_reinsert_moves_to_back() {
        let mut map: WadMap<u32> = [("a.wad", 1), ("b.wad", 2), ("c.wad", 3)]
            .into_iter()
            .collect();

        assert_eq!(map.remove("a.wad"), Some(1));
        assert_eq!(map.remove("a.wad"), None);
        assert!(!map.contains("a.wad"));

        map.insert("a.wad", 1);
        assert_eq!(map.names().collect::<Vec<_>>(), ["b.wad", "c.wad", "a.wad"]);
    }

    #[test]
    fn test_extend_and_into_iter() {
        let mut map: WadMap<u32> = [("a.wad", 1), ("b.wad", 2)].into_iter().collect();
        let other: WadMap<u32> = [("c.wad", 3), ("a.wad", 4)].into_iter().collect();

        map.extend(other);

        let entries: Vec<(String, u32)> = map.into_iter().collect();
        assert_eq!(
            entries,
            [
                ("a.wad".to_string(), 4),
                ("b.wad".to_string(), 2),
                ("c.wad".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_empty() {
        let map: WadMap<String> = WadMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("a.wad"), None);
        assert_eq!(map.values().count(), 0);
    }
}
