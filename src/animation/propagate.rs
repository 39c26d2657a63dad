//! Hierarchical bone-transform propagation.
//!
//! Walks a clip's hierarchy tree in lock-step with its bone channels,
//! accumulating global transforms. Two outputs per skeletal bone: the
//! skinning palette entry (`global · inverse_bind`, consumed directly by
//! GPU skinning) and a decomposed TRS written into the bone's scene node so
//! non-rendering consumers (physics colliders, gameplay logic) see the
//! current pose.

use glam::Mat4;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::animation::clip::{AnimationClip, HierarchyNode};
use crate::scene::node::Node;
use crate::scene::NodeHandle;

/// Evaluates `clip` at `cursor_ticks`, writing the skinning palette and the
/// bone-entity transforms. Invoked once per tick for the active clip.
pub fn propagate_bone_transforms(
    clip: &AnimationClip,
    cursor_ticks: f32,
    palette: &mut [Mat4],
    bone_entities: &FxHashMap<usize, NodeHandle>,
    nodes: &mut SlotMap<NodeHandle, Node>,
) {
    let mut writer = PoseWriter {
        clip,
        cursor_ticks,
        palette,
        bone_entities,
        nodes,
    };
    writer.walk(&clip.root, Mat4::IDENTITY, 0);
}

struct PoseWriter<'a> {
    clip: &'a AnimationClip,
    cursor_ticks: f32,
    palette: &'a mut [Mat4],
    bone_entities: &'a FxHashMap<usize, NodeHandle>,
    nodes: &'a mut SlotMap<NodeHandle, Node>,
}

impl PoseWriter<'_> {
    fn walk(&mut self, node: &HierarchyNode, parent_global: Mat4, depth: usize) {
        // Animation overrides the rest pose only for animated bones;
        // un-animated nodes (mesh-only branches) keep their bind transform.
        let local = match self.clip.channel_for(&node.name) {
            Some(channel) => channel.local_transform(self.cursor_ticks),
            None => node.local_bind_transform,
        };
        let global = parent_global * local;

        if let Some(offset) = self.clip.bone_offsets().get(&node.name) {
            if let Some(slot) = self.palette.get_mut(offset.index) {
                *slot = global * offset.inverse_bind;
            } else {
                log::warn!(
                    "bone '{}' has palette index {} beyond capacity {}, skipped",
                    node.name,
                    offset.index,
                    self.palette.len()
                );
            }

            if let Some(&handle) = self.bone_entities.get(&offset.index) {
                // Depth 1 folds in the synthetic root's transform, which is
                // otherwise invisible to first-level bones; deeper bones stay
                // parent-relative because the entity transform hierarchy
                // re-derives world transforms by walking the parent chain.
                let source = if depth == 1 { global } else { local };
                let (scale, rotation, translation) = source.to_scale_rotation_translation();

                if let Some(bone_node) = self.nodes.get_mut(handle) {
                    bone_node.transform.position = translation;
                    bone_node.transform.rotation = rotation;
                    bone_node.transform.scale = scale;
                    bone_node.transform.mark_dirty();
                } else {
                    log::warn!(
                        "bone entity for palette index {} is gone, pose not written this tick",
                        offset.index
                    );
                }
            }
        }

        for child in &node.children {
            self.walk(child, global, depth + 1);
        }
    }
}
