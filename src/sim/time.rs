use std::time::Instant;

/// Answers "how long did the last simulation step take", in seconds.
///
/// The solver holds this only for the duration of a tick; it never drives
/// the clock itself.
pub trait TimeSource {
    fn last_step_duration(&self) -> f32;
}

/// Constant step duration, for lockstep simulations and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: f32,
}

impl FixedStepClock {
    /// # Panics
    /// Panics if `step` is negative.
    pub fn new(step: f32) -> Self {
        assert!(step >= 0.0, "step duration cannot be negative: {step}");
        Self { step }
    }
}

impl TimeSource for FixedStepClock {
    fn last_step_duration(&self) -> f32 {
        self.step
    }
}

/// Wall-clock step timer: `mark_step` records the elapsed duration since the
/// previous mark. Reports 0.0 until the first full step has elapsed.
#[derive(Debug)]
pub struct StepTimer {
    last_mark: Instant,
    last_duration: f32,
}

impl StepTimer {
    pub fn new() -> Self {
        Self {
            last_mark: Instant::now(),
            last_duration: 0.0,
        }
    }

    pub fn mark_step(&mut self) {
        let now = Instant::now();
        self.last_duration = now.duration_since(self.last_mark).as_secs_f32();
        self.last_mark = now;
    }
}

impl Default for StepTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for StepTimer {
    fn last_step_duration(&self) -> f32 {
        self.last_duration
    }
}
