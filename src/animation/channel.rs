use glam::{Mat4, Quat, Vec3};

use crate::animation::tracks::KeyframeTrack;

/// The three keyframe tracks driving one named bone within one clip.
///
/// `bone_index` is stable across the lifetime of the mesh's bone map and
/// indexes directly into the skinning palette.
#[derive(Debug, Clone)]
pub struct BoneChannel {
    pub name: String,
    pub bone_index: usize,
    pub positions: KeyframeTrack<Vec3>,
    pub rotations: KeyframeTrack<Quat>,
    pub scales: KeyframeTrack<Vec3>,
}

impl BoneChannel {
    /// Interpolated local transform of this bone at `time` (clip-local ticks).
    ///
    /// Composed as translation · rotation · scale, so scale applies to the
    /// vertex first.
    #[must_use]
    pub fn local_transform(&self, time: f32) -> Mat4 {
        let translation = self.positions.sample(time);
        let rotation = self.rotations.sample(time);
        let scale = self.scales.sample(time);

        Mat4::from_translation(translation) * Mat4::from_quat(rotation) * Mat4::from_scale(scale)
    }
}
