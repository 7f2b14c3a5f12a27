pub mod animator;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod path;
pub mod paths;
pub mod pose;
pub mod traits;

pub use animator::{CrossingBehavior, FinishBehavior, PathAnimator, PlaybackState};
pub use config::Config;
pub use path::{CameraPath, Keyframe, PathError};
pub use pose::Pose;
