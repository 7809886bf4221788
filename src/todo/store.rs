use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::PathBuf;

/// Opaque key-value blob persistence.
pub trait Store {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

/// Process-local store, lost on exit.
#[derive(Debug, Default, Clone)]
pub struct Memory(HashMap<String, String>);

impl Store for Memory {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.0.insert(key.to_string(), value);
        Ok(())
    }
}

/// All keys in one JSON object on disk. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct Disk {
    path: PathBuf,
}

impl Disk {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
    /// Sibling file that receives each write before it is renamed over `path`.
    fn staging(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
    fn entries(&self) -> anyhow::Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| anyhow::anyhow!("corrupt store {}: {}", self.path.display(), e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Store for Disk {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries()?.remove(key))
    }
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        let mut entries = self.entries()?;
        entries.insert(key.to_string(), value);
        let staging = self.staging();
        std::fs::write(&staging, serde_json::to_string_pretty(&entries)?)?;
        std::fs::rename(&staging, &self.path)?;
        log::debug!("wrote {} to {}", key, self.path.display());
        Ok(())
    }
}
