use glam::{Quat, Vec3};

/// A keyframe value that can be blended between two bracketing keys.
pub trait Interpolatable: Copy + Sized {
    fn interpolate(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for Vec3 {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        // Re-normalize: repeated slerp accumulates drift over long clips
        start.slerp(end, t).normalize()
    }
}
