use std::time::Instant;

/// Per-frame delta source for the animator
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Wall time between ticks
    Realtime { last_tick: Instant },
    /// Constant step, for headless or deterministic runs
    Fixed { step: f32 },
}

impl Clock {
    /// Wall clock starting now
    pub fn realtime() -> Self {
        Self::Realtime {
            last_tick: Instant::now(),
        }
    }

    /// Fixed clock running at `fps` frames per second
    pub fn fixed(fps: f32) -> Self {
        Self::Fixed { step: 1.0 / fps }
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        match self {
            Self::Realtime { last_tick } => {
                let now = Instant::now();
                let delta = now.duration_since(*last_tick).as_secs_f32();
                *last_tick = now;
                delta
            }
            Self::Fixed { step } => *step,
        }
    }

    /// Restart wall time measurement; no effect on a fixed clock
    pub fn reset(&mut self) {
        if let Self::Realtime { last_tick } = self {
            *last_tick = Instant::now();
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::realtime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn realtime_measures_delta() {
        let mut clock = Clock::realtime();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
    }

    #[test]
    fn fixed_step_is_constant() {
        let mut clock = Clock::fixed(50.0);
        assert_eq!(clock.tick(), 0.02);
        clock.reset();
        assert_eq!(clock.tick(), 0.02);
    }
}
