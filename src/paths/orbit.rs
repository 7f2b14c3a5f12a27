use glam::Vec3;

use crate::path::{CameraPath, Keyframe};

/// Ring of `count` keyframes around `center`, all looking at the center
pub fn create_orbit_path(
    center: Vec3,
    radius: f32,
    height: f32,
    count: usize,
    segment_duration: f32,
) -> CameraPath {
    let keyframes = (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            let offset = Vec3::new(angle.cos() * radius, height, angle.sin() * radius);
            Keyframe::new(center + offset, Vec3::ZERO, segment_duration)
        })
        .collect();

    CameraPath::new(keyframes, center, true)
}
