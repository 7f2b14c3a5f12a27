use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animator::{CrossingBehavior, FinishBehavior, PathAnimator};
use crate::core::Button;
use crate::path::CameraPath;
use crate::paths::create_cinematic_path;

/// Everything needed to set up a path animator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub path: CameraPath,
    #[serde(default = "default_trigger_key")]
    pub trigger_key: Button,
    #[serde(default)]
    pub finish: FinishBehavior,
    #[serde(default)]
    pub crossing: CrossingBehavior,
}

fn default_trigger_key() -> Button {
    Button::Space
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: create_cinematic_path(Vec3::ZERO),
            trigger_key: default_trigger_key(),
            finish: FinishBehavior::default(),
            crossing: CrossingBehavior::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).context("Failed to parse camera path config")?;
        config.path.validate().context("Invalid camera path")?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_json(&json).with_context(|| format!("In config {}", path.display()))?;

        log::info!(
            "Loaded camera path with {} keyframes from {}",
            config.path.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn build_animator(&self) -> PathAnimator {
        PathAnimator::new(self.path.clone())
            .with_finish(self.finish)
            .with_crossing(self.crossing)
    }
}
