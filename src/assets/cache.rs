use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::assets::import::{AssetBackend, ImportedScene};
use crate::errors::Result;

/// Process-wide cache of imported scenes, keyed by resource GUID.
///
/// Lookups are idempotent: the same GUID always yields the same cached
/// `Arc<ImportedScene>`, never a re-parse. Cloning the cache is cheap and
/// shares the underlying storage.
#[derive(Clone, Default)]
pub struct SceneCache {
    scenes: Arc<RwLock<FxHashMap<Uuid, Arc<ImportedScene>>>>,
}

impl SceneCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, guid: Uuid) -> bool {
        self.scenes.read().contains_key(&guid)
    }

    /// Returns the cached scene for `guid`, resolving and importing it on
    /// first use. The import is a deliberate one-time stall; subsequent
    /// calls only take the read lock.
    pub fn get_or_import(
        &self,
        guid: Uuid,
        backend: &dyn AssetBackend,
    ) -> Result<Arc<ImportedScene>> {
        if let Some(scene) = self.scenes.read().get(&guid) {
            return Ok(scene.clone());
        }

        let path = backend.resolve_path(guid)?;
        let scene = Arc::new(backend.import_scene(&path)?);

        // A racing import keeps whichever copy landed first
        let mut scenes = self.scenes.write();
        Ok(scenes.entry(guid).or_insert(scene).clone())
    }
}
