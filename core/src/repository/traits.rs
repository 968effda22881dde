use anyhow::Result;

/// Opaque per-user key-value persistence. Values are serialized snapshots;
/// a save always replaces the whole value under the key.
pub trait EventStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, json: &str) -> Result<()>;
}

impl<T: EventStore + ?Sized> EventStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, json: &str) -> Result<()> {
        (**self).save(key, json)
    }
}
