use glam::{Mat3, Quat, Vec3};
use serde::Serialize;

use crate::math::{lerp, slerp};
use crate::path::Keyframe;

/// Camera looks down local -Z
pub const CAMERA_FORWARD: Vec3 = Vec3::NEG_Z;
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Camera transform written to the host each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub position: Vec3,
    pub look_target: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub fn forward(&self) -> Vec3 {
        self.orientation * CAMERA_FORWARD
    }
}

/// Position and look target between two keyframes, before orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSample {
    pub position: Vec3,
    pub look_target: Vec3,
}

/// Blend two keyframes around `center`: direction by slerp, distance by lerp
pub fn interpolate_pose(current: &Keyframe, next: &Keyframe, progress: f32, center: Vec3) -> PoseSample {
    let start = current.position - center;
    let end = next.position - center;

    // A keyframe at the center has no direction; borrow the other one
    let end_direction = end.try_normalize();
    let start_direction = start.try_normalize().or(end_direction).unwrap_or(Vec3::Z);
    let end_direction = end_direction.unwrap_or(start_direction);

    let direction = slerp(start_direction, end_direction, progress);
    let magnitude = lerp(start.length(), end.length(), progress);

    PoseSample {
        position: center + direction * magnitude,
        look_target: center + current.look_at_offset.lerp(next.look_at_offset, progress),
    }
}

/// Rotation taking `CAMERA_FORWARD` onto `direction` with `up` as the secondary axis.
/// Returns `None` when `direction` has no length.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    let forward = direction.try_normalize()?;

    let right = forward
        .cross(up)
        .try_normalize()
        .unwrap_or_else(|| forward.any_orthonormal_vector());
    let camera_up = right.cross(forward);

    Some(Quat::from_mat3(&Mat3::from_cols(right, camera_up, -forward)).normalize())
}
