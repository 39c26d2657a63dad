//! Importer-facing data model and the asset backend interface.
//!
//! The model/scene importer itself lives outside this crate; it hands over
//! a plain [`ImportedScene`] — the node hierarchy plus the keyframe data of
//! every clip in the file — and the runtime builds its own structures from
//! that. The same boundary covers GUID→path resolution and loading the
//! state-machine definition document.

use std::path::{Path, PathBuf};

use glam::{Mat4, Quat, Vec3};
use uuid::Uuid;

use crate::animation::state_machine::StateMachineDoc;
use crate::errors::Result;

/// One node of the imported model's hierarchy.
///
/// `transform` is the node's local bind transform in the importer's
/// row-major convention; see [`mat4_from_row_major`].
#[derive(Debug, Clone)]
pub struct ImportedNode {
    pub name: String,
    pub transform: [[f32; 4]; 4],
    pub children: Vec<ImportedNode>,
}

/// Raw keyframes for one animated bone: `(timestamp, value)` pairs in
/// non-decreasing timestamp order.
#[derive(Debug, Clone)]
pub struct ImportedChannel {
    pub bone_name: String,
    pub positions: Vec<(f32, Vec3)>,
    pub rotations: Vec<(f32, Quat)>,
    pub scales: Vec<(f32, Vec3)>,
}

/// One animation record within an imported file.
#[derive(Debug, Clone)]
pub struct ImportedClip {
    pub name: String,
    pub duration_ticks: f32,
    pub ticks_per_second: f32,
    pub channels: Vec<ImportedChannel>,
}

/// Everything the importer produces for one model/animation file.
#[derive(Debug, Clone)]
pub struct ImportedScene {
    pub root: ImportedNode,
    pub clips: Vec<ImportedClip>,
}

/// Converts an imported row-major matrix into glam's column-major [`Mat4`].
///
/// Import libraries commonly store matrices row-major while glam stores
/// them column-major; the conversion is a transpose and must be applied to
/// every node transform exactly once.
#[must_use]
pub fn mat4_from_row_major(m: &[[f32; 4]; 4]) -> Mat4 {
    Mat4::from_cols_array_2d(m).transpose()
}

/// Host services the animation runtime depends on, injected at tick time.
///
/// Implementations are expected to fail with a descriptive error when a file
/// is absent or corrupt, when an imported scene has no root node, or when a
/// GUID has no registered path.
pub trait AssetBackend {
    /// Resolves a resource GUID to a file path.
    fn resolve_path(&self, guid: Uuid) -> Result<PathBuf>;

    /// Imports a model/animation file (node hierarchy + clips).
    fn import_scene(&self, path: &Path) -> Result<ImportedScene>;

    /// Loads a state-machine definition document.
    fn load_state_machine(&self, path: &Path) -> Result<StateMachineDoc>;
}
