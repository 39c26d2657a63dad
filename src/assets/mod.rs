//! Asset boundary: importer-facing data model, backend interface, and the
//! process-wide imported-scene cache.

pub mod cache;
pub mod import;

pub use cache::SceneCache;
pub use import::{
    AssetBackend, ImportedChannel, ImportedClip, ImportedNode, ImportedScene, mat4_from_row_major,
};
