use glam::Vec3;

use crate::path::{CameraPath, Keyframe};

/// Eight keyframes in three phases (approach, orbit, departure), looping back to the start
pub fn create_cinematic_path(center: Vec3) -> CameraPath {
    let at = |x: f32, y: f32, z: f32| center + Vec3::new(x, y, z);

    let keyframes = vec![
        // Approach: high and far, dropping toward the subject
        Keyframe::new(at(0.0, 12.0, 40.0), Vec3::ZERO, 3.0),
        Keyframe::new(at(0.0, 8.0, 25.0), Vec3::ZERO, 4.0),
        Keyframe::new(at(4.0, 4.0, 14.0), Vec3::new(0.0, 1.0, 0.0), 3.0),
        // Orbit at close range
        Keyframe::new(at(12.0, 3.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 3.0),
        Keyframe::new(at(0.0, 3.0, -12.0), Vec3::new(0.0, 1.5, 0.0), 3.0),
        Keyframe::new(at(-12.0, 3.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 3.0),
        // Departure: pull out and up, looking ahead of the subject
        Keyframe::new(at(-10.0, 9.0, 18.0), Vec3::new(0.0, 0.0, 5.0), 4.0),
        Keyframe::new(at(-6.0, 16.0, 35.0), Vec3::ZERO, 4.0),
    ];

    CameraPath::new(keyframes, center, true)
}
