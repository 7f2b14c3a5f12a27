// cli.rs - Command-line interface configuration
use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};

/// Built-in paths used when no config file is given
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPreset {
    Cinematic,
    Orbit,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "camera-path")]
#[command(about = "Plays a spherical camera path headlessly and prints the poses", long_about = None)]
pub struct Cli {
    /// JSON config with keyframes, sphere center and trigger key
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Built-in path to play when no config is given
    #[arg(long, value_enum, default_value_t = PathPreset::Cinematic)]
    pub path: PathPreset,

    /// Simulated run length in seconds
    #[arg(long, default_value_t = 30.0)]
    pub seconds: f32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    /// Stop after one pass instead of looping
    #[arg(long = "no-loop")]
    pub no_loop: bool,

    /// Snap to the final keyframe when a non-looping path ends
    #[arg(long)]
    pub snap: bool,

    /// Start each new segment at its first keyframe instead of clamped progress
    #[arg(long = "segment-start")]
    pub segment_start: bool,

    /// Print poses as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Print the resolved config as JSON and exit
    #[arg(long = "dump-config")]
    pub dump_config: bool,
}

impl Cli {
    /// Reject run lengths and frame rates that would never finish
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.fps.is_finite() && self.fps > 0.0,
            "--fps must be positive and finite, got {}",
            self.fps
        );
        ensure!(
            self.seconds.is_finite() && self.seconds >= 0.0,
            "--seconds must be finite and not negative, got {}",
            self.seconds
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["camera-path"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.path, PathPreset::Cinematic);
        assert_eq!(cli.fps, 30.0);
        assert!(!cli.no_loop && !cli.snap && !cli.segment_start && !cli.json && !cli.dump_config);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "camera-path",
            "--path",
            "orbit",
            "--seconds",
            "5",
            "--no-loop",
            "--snap",
            "--segment-start",
            "--json",
        ]);
        assert_eq!(cli.path, PathPreset::Orbit);
        assert_eq!(cli.seconds, 5.0);
        assert!(cli.no_loop && cli.snap && cli.segment_start && cli.json);
    }

    #[test]
    fn test_validate_rejects_unbounded_runs() {
        for seconds in ["inf", "NaN", "-1"] {
            let cli = Cli::parse_from(["camera-path".to_string(), format!("--seconds={}", seconds)]);
            assert!(cli.validate().is_err(), "--seconds {}", seconds);
        }
        for fps in ["0", "inf", "-30"] {
            let cli = Cli::parse_from(["camera-path".to_string(), format!("--fps={}", fps)]);
            assert!(cli.validate().is_err(), "--fps {}", fps);
        }
        let cli = Cli::parse_from(["camera-path", "--seconds", "0"]);
        assert!(cli.validate().is_ok());
    }
}
