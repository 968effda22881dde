use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::repository::traits::EventStore;

const FILE_EXTENSION: &str = "json";

/// One JSON file per key under `<base_dir>/<user>/`.
#[derive(Clone)]
pub struct FileEventStore {
    dir: PathBuf,
}

impl FileEventStore {
    pub fn new(base_dir: &Path, user: &str) -> Result<Self> {
        let dir = base_dir.join(user);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create data directory {}", dir.display()))?;
        Ok(FileEventStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, FILE_EXTENSION))
    }
}

impl EventStore for FileEventStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, json: &str) -> Result<()> {
        let path = self.path_for(key);
        let file = File::create(&path)
            .with_context(|| format!("Could not write {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        info!("saved {} ({} bytes)", path.display(), json.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_scoped_files() {
        let tmp = tempfile::tempdir().unwrap();
        let alice = FileEventStore::new(tmp.path(), "alice").unwrap();
        let bob = FileEventStore::new(tmp.path(), "bob").unwrap();

        alice.save("schedules", "[]").unwrap();
        assert_eq!(alice.load("schedules").unwrap(), Some("[]".to_string()));
        assert_eq!(bob.load("schedules").unwrap(), None);
        assert!(tmp.path().join("alice").join("schedules.json").exists());
    }
}
