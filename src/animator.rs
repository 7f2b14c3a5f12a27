use glam::{Quat, Vec3};
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::path::CameraPath;
use crate::pose::{interpolate_pose, look_rotation, Pose, CAMERA_FORWARD, WORLD_UP};
use crate::traits::{CameraController, PoseSink};

/// What the animator emits on the tick that completes a non-looping path
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishBehavior {
    /// Emit nothing; the camera keeps the pose of the previous tick
    #[default]
    Hold,
    /// Emit the exact end pose of the final segment
    Snap,
}

/// Pose emitted on the tick that completes a segment and moves to the next one
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingBehavior {
    /// Keep the clamped progress of 1 on the new segment (lands on the keyframe after next)
    #[default]
    Clamp,
    /// Start the new segment at progress 0 (lands on the keyframe just reached)
    SegmentStart,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Segment start, always in `0..keyframe_count`
    pub keyframe_index: usize,
    /// Seconds spent in the current segment
    pub segment_time: f32,
    pub is_moving: bool,
}

/// Plays a `CameraPath`: reset by `trigger`, advanced by `tick`
#[derive(Debug, Clone)]
pub struct PathAnimator {
    path: CameraPath,
    state: PlaybackState,
    finish: FinishBehavior,
    crossing: CrossingBehavior,
    last_pose: Option<Pose>,
}

impl PathAnimator {
    pub fn new(path: CameraPath) -> Self {
        if !path.is_playable() {
            warn!(
                "Camera path has {} keyframe(s), needs at least 2; animator is inert",
                path.len()
            );
        }

        Self {
            path,
            state: PlaybackState::default(),
            finish: FinishBehavior::default(),
            crossing: CrossingBehavior::default(),
            last_pose: None,
        }
    }

    pub fn with_finish(mut self, finish: FinishBehavior) -> Self {
        self.finish = finish;
        self
    }

    pub fn with_crossing(mut self, crossing: CrossingBehavior) -> Self {
        self.crossing = crossing;
        self
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state.is_moving
    }

    pub fn last_pose(&self) -> Option<Pose> {
        self.last_pose
    }

    /// Normalized time within the current segment, in [0, 1]
    pub fn progress(&self) -> f32 {
        let Some((_, next)) = self.path.segment(self.state.keyframe_index) else {
            return 0.0;
        };
        let progress = self.state.segment_time / next.duration;
        if progress.is_nan() {
            0.0
        } else {
            progress.min(1.0)
        }
    }

    /// Restart from the first segment, dropping any motion in progress
    pub fn trigger(&mut self) {
        if !self.path.is_playable() {
            return;
        }

        debug!("Camera path triggered ({} keyframes)", self.path.len());
        self.state = PlaybackState {
            keyframe_index: 0,
            segment_time: 0.0,
            is_moving: true,
        };
    }

    /// Advance playback by `delta` seconds and return the new pose, if any.
    ///
    /// At most one keyframe is crossed per tick: a long delta completes the
    /// current segment, the leftover time is dropped, and the pose on that tick
    /// follows `CrossingBehavior`.
    pub fn tick(&mut self, delta: f32) -> Option<Pose> {
        if !self.state.is_moving || !self.path.is_playable() {
            return None;
        }

        let count = self.path.len();
        self.state.segment_time += delta.max(0.0);

        let (_, next) = self.path.segment(self.state.keyframe_index)?;
        let mut progress = self.state.segment_time / next.duration;

        // Zero-length segments give inf or NaN; both count as complete
        if !progress.is_finite() || progress >= 1.0 {
            let next_index = self.state.keyframe_index + 1;

            if next_index >= count && !self.path.loop_path {
                self.state.is_moving = false;
                info!("Camera path finished");
                return match self.finish {
                    FinishBehavior::Hold => None,
                    FinishBehavior::Snap => self.pose_at(self.state.keyframe_index, 1.0),
                };
            }

            self.state.keyframe_index = next_index % count;
            self.state.segment_time = 0.0;
            progress = match self.crossing {
                CrossingBehavior::Clamp => 1.0,
                CrossingBehavior::SegmentStart => 0.0,
            };
            debug!("Camera path entered segment {}", self.state.keyframe_index);
        }

        trace!(
            "segment {} progress {:.3}",
            self.state.keyframe_index,
            progress
        );
        self.pose_at(self.state.keyframe_index, progress)
    }

    /// One host frame: apply the trigger edge (if any), then tick
    pub fn update(&mut self, delta: f32, trigger_requested: bool) -> Option<Pose> {
        if trigger_requested {
            self.trigger();
        }
        self.tick(delta)
    }

    /// `update`, writing the resulting pose into `sink`. Returns whether a pose was written.
    pub fn drive(&mut self, delta: f32, trigger_requested: bool, sink: &mut impl PoseSink) -> bool {
        match self.update(delta, trigger_requested) {
            Some(pose) => {
                sink.apply_pose(&pose);
                true
            }
            None => false,
        }
    }

    fn pose_at(&mut self, index: usize, progress: f32) -> Option<Pose> {
        let (current, next) = self.path.segment(index)?;
        let sample = interpolate_pose(current, next, progress, self.path.sphere_center);

        let orientation = look_rotation(sample.look_target - sample.position, WORLD_UP)
            .or(self.last_pose.map(|pose| pose.orientation))
            .unwrap_or(Quat::IDENTITY);

        let pose = Pose {
            position: sample.position,
            look_target: sample.look_target,
            orientation,
        };
        self.last_pose = Some(pose);
        Some(pose)
    }
}

impl CameraController for PathAnimator {
    fn position(&self) -> Vec3 {
        match (self.last_pose, self.path.keyframes.first()) {
            (Some(pose), _) => pose.position,
            (None, Some(first)) => first.position,
            (None, None) => Vec3::ZERO,
        }
    }

    fn orientation(&self) -> Quat {
        self.last_pose
            .map(|pose| pose.orientation)
            .unwrap_or(Quat::IDENTITY)
    }

    fn forward(&self) -> Vec3 {
        self.orientation() * CAMERA_FORWARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Keyframe;

    fn square_path(loop_path: bool) -> CameraPath {
        CameraPath::new(
            vec![
                Keyframe::new(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 1.0),
                Keyframe::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0),
                Keyframe::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO, 1.0),
                Keyframe::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, 1.0),
            ],
            Vec3::ZERO,
            loop_path,
        )
    }

    #[test]
    fn test_starts_idle() {
        let animator = PathAnimator::new(square_path(true));
        assert_eq!(animator.state(), PlaybackState::default());
        assert!(animator.last_pose().is_none());
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut animator = PathAnimator::new(square_path(true));
        assert!(animator.tick(0.5).is_none());
        assert_eq!(animator.state().segment_time, 0.0);
    }

    #[test]
    fn test_trigger_starts_playback() {
        let mut animator = PathAnimator::new(square_path(false));
        animator.trigger();
        assert!(animator.is_moving());
        let pose = animator.tick(0.25).unwrap();
        assert!((animator.progress() - 0.25).abs() < 1e-6);
        assert!((pose.position.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_segment_advance_resets_time() {
        let mut animator = PathAnimator::new(square_path(false));
        animator.trigger();
        animator.tick(0.5);
        let pose = animator.tick(0.75).unwrap();

        let state = animator.state();
        assert_eq!(state.keyframe_index, 1);
        assert_eq!(state.segment_time, 0.0);
        assert_eq!(animator.progress(), 0.0);
        // Clamped progress of 1 on segment 1 -> 2
        assert!(pose.position.abs_diff_eq(Vec3::new(-5.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_segment_start_crossing_lands_on_reached_keyframe() {
        let mut animator =
            PathAnimator::new(square_path(false)).with_crossing(CrossingBehavior::SegmentStart);
        animator.trigger();
        animator.tick(0.5);
        let pose = animator.tick(0.75).unwrap();

        assert_eq!(animator.state().keyframe_index, 1);
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-4));
    }

    #[test]
    fn test_negative_and_nan_delta_do_not_rewind() {
        let mut animator = PathAnimator::new(square_path(false));
        animator.trigger();
        animator.tick(0.5);
        animator.tick(-1.0);
        animator.tick(f32::NAN);
        assert!((animator.state().segment_time - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_snap_emits_final_pose() {
        let mut animator = PathAnimator::new(square_path(false)).with_finish(FinishBehavior::Snap);
        animator.trigger();
        for _ in 0..3 {
            assert!(animator.tick(1.0).is_some());
        }
        let last = animator.tick(1.0).unwrap();
        assert!(!animator.is_moving());
        assert!(last.position.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_degenerate_look_keeps_previous_orientation() {
        // Second keyframe looks at its own position
        let path = CameraPath::new(
            vec![
                Keyframe::new(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, 1.0),
                Keyframe::new(Vec3::new(4.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0), 2.0),
            ],
            Vec3::ZERO,
            false,
        );
        let mut animator = PathAnimator::new(path).with_crossing(CrossingBehavior::SegmentStart);
        animator.trigger();
        let before = animator.tick(1.0).unwrap();
        let at_target = animator.tick(1.0).unwrap();

        assert!(at_target.position.abs_diff_eq(at_target.look_target, 1e-4));
        assert!(at_target.orientation.is_finite());
        assert_eq!(at_target.orientation, before.orientation);
    }

    #[test]
    fn test_controller_reports_last_pose() {
        let mut animator = PathAnimator::new(square_path(true));
        assert_eq!(animator.position(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(animator.orientation(), Quat::IDENTITY);

        animator.trigger();
        let pose = animator.tick(0.5).unwrap();
        assert_eq!(animator.position(), pose.position);
        assert!(animator.forward().abs_diff_eq(pose.forward(), 1e-6));
        // Path circles the origin while looking at it
        assert!(animator.forward().dot(-pose.position.normalize()) > 0.999);
    }

    #[test]
    fn test_view_matrix_centers_look_target() {
        let mut animator = PathAnimator::new(square_path(true));
        animator.trigger();
        let pose = animator.tick(0.3).unwrap();

        let view = animator.view_matrix();
        assert!(view.transform_point3(pose.position).abs_diff_eq(Vec3::ZERO, 1e-4));

        // Look target sits straight ahead, down view-space -Z
        let target = view.transform_point3(pose.look_target);
        assert!(target.x.abs() < 1e-4 && target.y.abs() < 1e-4);
        assert!((target.z + pose.position.distance(pose.look_target)).abs() < 1e-3);
    }
}
