use anyhow::Result;
use clap::Parser;
use glam::Vec3;

use camera_path::cli::{Cli, PathPreset};
use camera_path::config::Config;
use camera_path::core::{Button, Clock, Controller, PressEdge};
use camera_path::paths::create_orbit_path;
use camera_path::pose::Pose;
use camera_path::traits::PoseSink;
use camera_path::{CrossingBehavior, FinishBehavior};

/// Writes poses to stdout, one line per frame
struct StdoutSink {
    json: bool,
    frame: u64,
    time: f32,
}

impl PoseSink for StdoutSink {
    fn apply_pose(&mut self, pose: &Pose) {
        if self.json {
            let line = serde_json::json!({
                "frame": self.frame,
                "time": self.time,
                "pose": pose,
            });
            println!("{}", line);
        } else {
            let forward = pose.forward();
            println!(
                "{:>6} {:>8.3}s  pos ({:>8.3}, {:>8.3}, {:>8.3})  fwd ({:>6.3}, {:>6.3}, {:>6.3})",
                self.frame,
                self.time,
                pose.position.x,
                pose.position.y,
                pose.position.z,
                forward.x,
                forward.y,
                forward.z,
            );
        }
    }
}

/// Holds the trigger key down for the first frame only
struct ScriptedInput {
    trigger_key: Button,
    pressed: Vec<Button>,
}

impl ScriptedInput {
    fn set_frame(&mut self, frame: u64) {
        self.pressed.clear();
        if frame == 0 {
            self.pressed.push(self.trigger_key);
        }
    }
}

impl Controller for ScriptedInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match (&cli.config, cli.path) {
        (Some(path), _) => Config::load(path)?,
        (None, PathPreset::Cinematic) => Config::default(),
        (None, PathPreset::Orbit) => Config {
            path: create_orbit_path(Vec3::ZERO, 15.0, 4.0, 8, 2.0),
            ..Config::default()
        },
    };

    if cli.no_loop {
        config.path.loop_path = false;
    }
    if cli.snap {
        config.finish = FinishBehavior::Snap;
    }
    if cli.segment_start {
        config.crossing = CrossingBehavior::SegmentStart;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    cli.validate()?;

    let config = resolve_config(&cli)?;
    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let mut animator = config.build_animator();
    let mut clock = Clock::fixed(cli.fps);
    let mut trigger = PressEdge::new(config.trigger_key);
    let mut input = ScriptedInput {
        trigger_key: config.trigger_key,
        pressed: Vec::new(),
    };
    let mut sink = StdoutSink {
        json: cli.json,
        frame: 0,
        time: 0.0,
    };

    let frames = (cli.seconds * cli.fps).ceil() as u64;
    log::info!(
        "Playing {} keyframes ({:.1}s per pass) for {} frames at {} fps",
        config.path.len(),
        config.path.total_duration(),
        frames,
        cli.fps
    );

    let mut written = 0u64;
    for frame in 0..frames {
        input.set_frame(frame);
        let delta = clock.tick();
        sink.frame = frame;
        sink.time += delta;

        let pressed = trigger.sample(&input);
        if animator.drive(delta, pressed, &mut sink) {
            written += 1;
        }
    }

    log::info!(
        "Wrote {} poses, animator {}",
        written,
        if animator.is_moving() { "still playing" } else { "idle" }
    );
    Ok(())
}
