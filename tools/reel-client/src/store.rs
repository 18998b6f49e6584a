//! Cart persistence.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;

use crate::cart::CartItem;

/// Where the cart lives between runs.
pub trait CartStore {
    fn load(&self) -> anyhow::Result<Vec<CartItem>>;
    fn save(&self, items: &[CartItem]) -> anyhow::Result<()>;
}

/// Cart kept as a JSON array in a single file.
pub struct JsonFileCartStore {
    pub path: PathBuf,
}

impl JsonFileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> anyhow::Result<Vec<CartItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read(&self.path)
            .with_context(|| format!("read cart file {}", self.path.display()))?;
        serde_json::from_slice(&raw)
            .with_context(|| format!("parse cart file {}", self.path.display()))
    }

    fn save(&self, items: &[CartItem]) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create cart directory {}", dir.display()))?;
        }
        let raw = serde_json::to_vec_pretty(items).context("serialize cart")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("write cart file {}", self.path.display()))
    }
}

/// Process-local cart, lost on exit.
#[derive(Default)]
pub struct MemoryCartStore {
    items: Mutex<Vec<CartItem>>,
}

impl MemoryCartStore {
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> anyhow::Result<Vec<CartItem>> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save(&self, items: &[CartItem]) -> anyhow::Result<()> {
        *self.items.lock().unwrap_or_else(|e| e.into_inner()) = items.to_vec();
        Ok(())
    }
}
