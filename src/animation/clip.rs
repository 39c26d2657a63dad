use glam::Mat4;
use rustc_hash::FxHashMap;

use crate::animation::channel::BoneChannel;
use crate::animation::tracks::KeyframeTrack;
use crate::animation::values::Interpolatable;
use crate::assets::import::{ImportedNode, ImportedScene, mat4_from_row_major};
use crate::errors::{MarrowError, Result};

/// Palette index and inverse bind matrix of one bone within a mesh.
#[derive(Debug, Clone, Copy)]
pub struct BoneOffset {
    pub index: usize,
    pub inverse_bind: Mat4,
}

/// A mesh's bone map: bone name → palette slot + inverse bind matrix.
///
/// Indices are handed out monotonically and never reused, so every clip
/// imported against the same map agrees on which palette slot a bone owns.
#[derive(Debug, Clone, Default)]
pub struct SkinBoneMap {
    offsets: FxHashMap<String, BoneOffset>,
    count: usize,
}

impl SkinBoneMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BoneOffset> {
        self.offsets.get(name)
    }

    /// Returns the existing offset for `name`, or registers it under the
    /// next free palette index.
    pub fn get_or_insert(&mut self, name: &str, inverse_bind: Mat4) -> BoneOffset {
        if let Some(offset) = self.offsets.get(name) {
            return *offset;
        }
        let offset = BoneOffset {
            index: self.count,
            inverse_bind,
        };
        self.count += 1;
        self.offsets.insert(name.to_string(), offset);
        offset
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn offsets(&self) -> &FxHashMap<String, BoneOffset> {
        &self.offsets
    }
}

/// A static tree mirroring the imported model's node hierarchy.
///
/// Shared read-only structure per clip; the bind transform is the default
/// pose for any node no channel animates.
#[derive(Debug, Clone)]
pub struct HierarchyNode {
    pub name: String,
    pub local_bind_transform: Mat4,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    fn from_imported(node: &ImportedNode) -> Self {
        Self {
            name: node.name.clone(),
            local_bind_transform: mat4_from_row_major(&node.transform),
            children: node.children.iter().map(Self::from_imported).collect(),
        }
    }
}

/// One named animation loaded from one imported file.
///
/// Owns its hierarchy tree and bone channels; `bone_offsets` is a snapshot
/// of the mesh bone map taken at import time, so later imports of other
/// clips never retroactively affect this clip.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration_ticks: f32,
    pub ticks_per_second: f32,
    pub root: HierarchyNode,
    channels: Vec<BoneChannel>,
    channel_index: FxHashMap<String, usize>,
    bone_offsets: FxHashMap<String, BoneOffset>,
}

impl AnimationClip {
    /// Builds a clip from the imported scene's `clip_index`-th animation
    /// record, merging its bones into `bone_map`.
    ///
    /// A channel naming a bone absent from the mesh's map is a recoverable
    /// authoring quirk (prop bones and similar): the bone is registered
    /// under the next free palette index with an identity inverse bind and
    /// a warning is logged.
    pub fn from_import(
        scene: &ImportedScene,
        clip_index: usize,
        bone_map: &mut SkinBoneMap,
    ) -> Result<Self> {
        let Some(imported) = scene.clips.get(clip_index) else {
            return Err(MarrowError::ClipIndexOutOfBounds {
                index: clip_index,
                available: scene.clips.len(),
            });
        };

        let root = HierarchyNode::from_imported(&scene.root);

        let mut channels = Vec::with_capacity(imported.channels.len());
        let mut channel_index = FxHashMap::default();
        for channel in &imported.channels {
            let offset = match bone_map.get(&channel.bone_name) {
                Some(offset) => *offset,
                None => {
                    let offset = bone_map.get_or_insert(&channel.bone_name, Mat4::IDENTITY);
                    log::warn!(
                        "mesh is missing bone '{}' referenced by clip '{}', registered as palette index {}",
                        channel.bone_name,
                        imported.name,
                        offset.index
                    );
                    offset
                }
            };

            channel_index.insert(channel.bone_name.clone(), channels.len());
            channels.push(BoneChannel {
                name: channel.bone_name.clone(),
                bone_index: offset.index,
                positions: track_from_keys(&channel.positions),
                rotations: track_from_keys(&channel.rotations),
                scales: track_from_keys(&channel.scales),
            });
        }

        Ok(Self {
            name: imported.name.clone(),
            duration_ticks: imported.duration_ticks,
            ticks_per_second: imported.ticks_per_second,
            root,
            channels,
            channel_index,
            bone_offsets: bone_map.offsets().clone(),
        })
    }

    /// The channel animating `name`, if this clip has one.
    #[must_use]
    pub fn channel_for(&self, name: &str) -> Option<&BoneChannel> {
        self.channel_index
            .get(name)
            .map(|&index| &self.channels[index])
    }

    #[must_use]
    pub fn channels(&self) -> &[BoneChannel] {
        &self.channels
    }

    /// Bone map snapshot of this clip: name → palette slot + inverse bind.
    #[must_use]
    pub fn bone_offsets(&self) -> &FxHashMap<String, BoneOffset> {
        &self.bone_offsets
    }
}

fn track_from_keys<T: Interpolatable>(keys: &[(f32, T)]) -> KeyframeTrack<T> {
    let (times, values) = keys.iter().copied().unzip();
    KeyframeTrack::new(times, values)
}
