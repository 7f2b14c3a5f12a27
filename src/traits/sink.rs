use crate::pose::Pose;

/// Receives camera poses from the animator (the host's camera transform)
pub trait PoseSink {
    fn apply_pose(&mut self, pose: &Pose);
}

/// Keeps every pose it receives, mostly useful for tests and recordings
impl PoseSink for Vec<Pose> {
    fn apply_pose(&mut self, pose: &Pose) {
        self.push(*pose);
    }
}
