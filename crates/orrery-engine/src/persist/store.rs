// persist/store.rs
//
// Minimal string key-value abstraction over client storage. The web crate
// backs this with localStorage; tests use the in-memory map. Writes are
// fire-and-forget, last-write-wins — there is no transactional guarantee
// across keys.

use std::collections::HashMap;

pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// In-memory backend for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.map.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.read("k").is_none());
        store.write("k", "v");
        assert_eq!(store.read("k").as_deref(), Some("v"));
        store.delete("k");
        assert!(store.read("k").is_none());
    }
}
