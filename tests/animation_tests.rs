//! Keyframe Interpolation Tests
//!
//! Tests for:
//! - KeyframeTrack linear-scan sampling (single key, bracketing, end clamp)
//! - Interpolatable lerp/slerp implementations (Vec3, Quat)
//! - BoneChannel local-transform composition (T · R · S)
//! - Row-major → column-major import matrix conversion

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Quat, Vec3};

use marrow::animation::channel::BoneChannel;
use marrow::animation::tracks::KeyframeTrack;
use marrow::animation::values::Interpolatable;
use marrow::assets::import::mat4_from_row_major;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn mat4_approx(a: Mat4, b: Mat4, tolerance: f32) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() < tolerance)
}

// ============================================================================
// KeyframeTrack: Single-Key Fast Path
// ============================================================================

#[test]
fn track_single_key_is_time_independent() {
    let track = KeyframeTrack::new(vec![0.0], vec![Vec3::new(1.0, 2.0, 3.0)]);

    for t in [0.0, 0.5, 7.0, 123.0] {
        let val = track.sample(t);
        assert!(approx(val.x, 1.0) && approx(val.y, 2.0) && approx(val.z, 3.0));
    }
}

#[test]
fn channel_single_key_transform_is_time_independent() {
    let channel = BoneChannel {
        name: "Hips".to_string(),
        bone_index: 0,
        positions: KeyframeTrack::new(vec![0.0], vec![Vec3::new(1.0, 2.0, 3.0)]),
        rotations: KeyframeTrack::new(vec![0.0], vec![Quat::from_rotation_y(0.7)]),
        scales: KeyframeTrack::new(vec![0.0], vec![Vec3::splat(2.0)]),
    };

    let reference = channel.local_transform(0.0);
    for t in [0.25, 1.0, 42.0] {
        assert!(
            mat4_approx(channel.local_transform(t), reference, EPSILON),
            "single-key channel should be constant, differs at t={t}"
        );
    }
}

// ============================================================================
// KeyframeTrack: Boundary Continuity
// ============================================================================

#[test]
fn track_two_key_endpoints_and_midpoint() {
    let a = Vec3::ZERO;
    let b = Vec3::new(10.0, 20.0, 30.0);
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![a, b]);

    let start = track.sample(0.0);
    assert!(approx(start.x, 0.0) && approx(start.y, 0.0) && approx(start.z, 0.0));

    // Approaching the last key from below converges to its value
    let near_end = track.sample(1.0 - 1e-4);
    assert!((near_end - b).length() < 1e-2, "got {near_end}");

    let mid = track.sample(0.5);
    assert!(approx(mid.x, 5.0) && approx(mid.y, 10.0) && approx(mid.z, 15.0));
}

#[test]
fn track_quat_midpoint_is_slerp() {
    let q0 = Quat::IDENTITY;
    let q1 = Quat::from_rotation_y(PI * 0.5);
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![q0, q1]);

    let val = track.sample(0.5);
    let expected = q0.slerp(q1, 0.5);
    let angle = val.angle_between(expected);
    assert!(angle < 1e-4, "slerp midpoint mismatch: angle={angle}");
}

#[test]
fn track_at_last_key_clamps_bracket() {
    // Sampling exactly at the last timestamp must not degenerate the
    // bracketing search; the interval clamps to the final pair
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![Vec3::ZERO, Vec3::splat(10.0), Vec3::splat(20.0)],
    );
    assert!(approx(track.sample(2.0).x, 20.0), "got {}", track.sample(2.0));
}

#[test]
fn track_before_first_key_clamps_to_first() {
    let track = KeyframeTrack::new(vec![1.0, 2.0], vec![Vec3::splat(10.0), Vec3::splat(20.0)]);
    assert!(approx(track.sample(0.0).x, 10.0), "got {}", track.sample(0.0));
}

// ============================================================================
// Interpolatable: Quaternion Normalization
// ============================================================================

#[test]
fn quat_interpolation_stays_normalized() {
    let keys = [
        (Quat::from_rotation_y(0.3), Quat::from_rotation_x(2.8)),
        (Quat::from_rotation_z(-1.2), Quat::from_axis_angle(Vec3::ONE.normalize(), 2.0)),
        (Quat::IDENTITY, Quat::from_rotation_y(PI - 1e-3)),
    ];

    for (a, b) in keys {
        for i in 0..=10 {
            let t = i as f32 * 0.1;
            let q = Quat::interpolate(a, b, t);
            assert!(
                (q.length() - 1.0).abs() < EPSILON,
                "interpolated quaternion drifted off unit length: |q|={}",
                q.length()
            );
        }
    }
}

// ============================================================================
// BoneChannel: Transform Composition
// ============================================================================

#[test]
fn channel_composes_translation_rotation_scale() {
    let translation = Vec3::new(1.0, 2.0, 3.0);
    let rotation = Quat::from_rotation_y(FRAC_PI_2);
    let scale = Vec3::splat(2.0);

    let channel = BoneChannel {
        name: "Spine".to_string(),
        bone_index: 1,
        positions: KeyframeTrack::new(vec![0.0], vec![translation]),
        rotations: KeyframeTrack::new(vec![0.0], vec![rotation]),
        scales: KeyframeTrack::new(vec![0.0], vec![scale]),
    };

    let expected =
        Mat4::from_translation(translation) * Mat4::from_quat(rotation) * Mat4::from_scale(scale);
    assert!(
        mat4_approx(channel.local_transform(0.0), expected, EPSILON),
        "channel transform must be T * R * S"
    );

    // Scale applies to the vertex first: a unit-x point lands scaled, then
    // rotated, then translated
    let point = channel.local_transform(0.0).transform_point3(Vec3::X);
    let by_hand = rotation * (scale * Vec3::X) + translation;
    assert!((point - by_hand).length() < 1e-4, "got {point}, expected {by_hand}");
}

// ============================================================================
// Import Matrix Convention
// ============================================================================

#[test]
fn row_major_conversion_matches_known_matrix() {
    // A translation by (3, 4, 5) stored row-major keeps the offsets in the
    // last column of each row
    let row_major = [
        [1.0, 0.0, 0.0, 3.0],
        [0.0, 1.0, 0.0, 4.0],
        [0.0, 0.0, 1.0, 5.0],
        [0.0, 0.0, 0.0, 1.0],
    ];

    let converted = mat4_from_row_major(&row_major);
    let expected = Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0));
    assert!(
        mat4_approx(converted, expected, EPSILON),
        "row-major conversion mismatch:\n{converted}\nvs\n{expected}"
    );
}

#[test]
fn row_major_conversion_round_trips() {
    let original = Mat4::from_translation(Vec3::new(1.0, -2.0, 0.5))
        * Mat4::from_quat(Quat::from_rotation_z(0.8))
        * Mat4::from_scale(Vec3::new(2.0, 1.0, 0.5));

    let row_major = original.transpose().to_cols_array_2d();
    assert!(mat4_approx(mat4_from_row_major(&row_major), original, EPSILON));
}
