use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authored waypoint of a camera path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub position: Vec3,
    /// Where the camera looks once this keyframe is reached, relative to the sphere center
    pub look_at_offset: Vec3,
    /// Seconds to travel from the previous keyframe to this one
    pub duration: f32,
}

impl Keyframe {
    pub const fn new(position: Vec3, look_at_offset: Vec3, duration: f32) -> Self {
        Self {
            position,
            look_at_offset,
            duration,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("keyframe {index} has invalid duration {duration} (must be finite and >= 0)")]
    InvalidDuration { index: usize, duration: f32 },
    #[error("keyframe {index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },
    #[error("sphere center is not finite")]
    NonFiniteCenter,
}

/// Ordered keyframes around a fixed sphere center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPath {
    pub keyframes: Vec<Keyframe>,
    pub sphere_center: Vec3,
    #[serde(default)]
    pub loop_path: bool,
}

impl CameraPath {
    pub fn new(keyframes: Vec<Keyframe>, sphere_center: Vec3, loop_path: bool) -> Self {
        Self {
            keyframes,
            sphere_center,
            loop_path,
        }
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Interpolation needs at least two keyframes
    pub fn is_playable(&self) -> bool {
        self.keyframes.len() >= 2
    }

    /// Keyframes bounding the segment that starts at `index`.
    /// The segment after the last keyframe wraps back to the first.
    pub fn segment(&self, index: usize) -> Option<(&Keyframe, &Keyframe)> {
        let count = self.keyframes.len();
        if count < 2 {
            return None;
        }
        let current = self.keyframes.get(index)?;
        let next = &self.keyframes[(index + 1) % count];
        Some((current, next))
    }

    /// Seconds from trigger until playback finishes (or one full loop)
    pub fn total_duration(&self) -> f32 {
        if !self.is_playable() {
            return 0.0;
        }
        self.keyframes.iter().map(|k| k.duration).sum()
    }

    pub fn validate(&self) -> Result<(), PathError> {
        if !self.sphere_center.is_finite() {
            return Err(PathError::NonFiniteCenter);
        }

        for (index, keyframe) in self.keyframes.iter().enumerate() {
            if !keyframe.duration.is_finite() || keyframe.duration < 0.0 {
                return Err(PathError::InvalidDuration {
                    index,
                    duration: keyframe.duration,
                });
            }
            if !keyframe.position.is_finite() {
                return Err(PathError::NonFinite {
                    index,
                    field: "position",
                });
            }
            if !keyframe.look_at_offset.is_finite() {
                return Err(PathError::NonFinite {
                    index,
                    field: "look_at_offset",
                });
            }
        }

        Ok(())
    }
}
