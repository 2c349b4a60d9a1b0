/// Lower bound for the playback speed multiplier.
pub const SPEED_MIN: f32 = 0.1;
/// Upper bound for the playback speed multiplier.
pub const SPEED_MAX: f32 = 5.0;

/// Simulated-time clock owned by the animation scheduler.
///
/// Decouples simulated time from wall-clock time through two knobs: a
/// playback speed multiplier (clamped, user-facing) and a time-scale factor
/// (unconstrained, controls overall orbital pace). Host timestamps are f64
/// seconds; accumulators stay f64 so long sessions keep precision.
pub struct SimulationClock {
    /// Accumulated speed-scaled wall time.
    elapsed: f64,
    /// Wall-clock anchor of the last unpaused tick. `None` means the next
    /// tick re-anchors itself and contributes a zero delta.
    last_tick: Option<f64>,
    speed: f32,
    time_scale: f32,
    running: bool,
    paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            last_tick: None,
            speed: 1.0,
            time_scale: 1.0,
            running: false,
            paused: false,
        }
    }

    /// Advance the clock to `now`. Returns the speed-scaled frame delta, or
    /// `None` when stopped or paused. A paused call leaves the wall-clock
    /// anchor untouched; the anchor is refreshed on resume instead, so the
    /// delta after a resume never includes the paused span.
    pub fn advance(&mut self, now: f64) -> Option<f64> {
        if !self.running || self.paused {
            return None;
        }
        let delta = match self.last_tick {
            Some(prev) => (now - prev) * self.speed as f64,
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.elapsed += delta;
        Some(delta)
    }

    /// Transition the paused state. Resuming re-anchors the wall clock at
    /// `now` so orbits do not jump across the paused span.
    pub fn set_paused(&mut self, paused: bool, now: f64) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        if !paused {
            self.last_tick = Some(now);
        }
    }

    /// Attach/detach the clock. Starting clears the anchor so the first
    /// tick after a (re)start contributes a zero delta. Idempotent.
    pub fn set_running(&mut self, running: bool) {
        if self.running == running {
            return;
        }
        self.running = running;
        if running {
            self.last_tick = None;
        }
    }

    /// Reset accumulated simulated time. Does not touch pause/run state.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.last_tick = None;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Overall orbital speed scale, independent of playback speed.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale;
    }

    /// Simulated time fed to orbital kinematics.
    pub fn sim_time(&self) -> f64 {
        self.elapsed * self.time_scale as f64
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_clock() -> SimulationClock {
        let mut clock = SimulationClock::new();
        clock.set_running(true);
        clock
    }

    #[test]
    fn first_advance_is_zero_delta() {
        let mut clock = running_clock();
        assert_eq!(clock.advance(5.0), Some(0.0));
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn advance_accumulates_scaled_delta() {
        let mut clock = running_clock();
        clock.set_speed(2.0);
        clock.advance(1.0);
        let delta = clock.advance(3.0).unwrap();
        assert!((delta - 4.0).abs() < 1e-12, "delta = {delta}");
        assert!((clock.elapsed() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn speed_clamps_to_bounds() {
        let mut clock = SimulationClock::new();
        let cases = [
            (-5.0, 0.1),
            (0.0, 0.1),
            (0.1, 0.1),
            (3.0, 3.0),
            (5.0, 5.0),
            (10.0, 5.0),
        ];
        for (input, expected) in cases {
            clock.set_speed(input);
            assert_eq!(clock.speed(), expected, "set_speed({input})");
        }
    }

    #[test]
    fn paused_advance_returns_none_and_holds_elapsed() {
        let mut clock = running_clock();
        clock.advance(0.0);
        clock.advance(1.0);
        clock.set_paused(true, 1.0);
        assert_eq!(clock.advance(2.0), None);
        assert!((clock.elapsed() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn resume_does_not_count_paused_span() {
        let mut clock = running_clock();
        clock.advance(0.0);
        clock.advance(1.0);
        clock.set_paused(true, 1.0);
        clock.advance(10.0);
        clock.set_paused(false, 10.0);
        // No wall time has passed since the resume, so no sim time accrues.
        assert_eq!(clock.advance(10.0), Some(0.0));
        assert!((clock.elapsed() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn stopped_clock_does_not_advance() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.advance(1.0), None);
    }

    #[test]
    fn restart_reanchors_instead_of_jumping() {
        let mut clock = running_clock();
        clock.advance(0.0);
        clock.advance(1.0);
        clock.set_running(false);
        clock.set_running(true);
        // A long stopped span must not land in the first delta after restart.
        assert_eq!(clock.advance(100.0), Some(0.0));
    }

    #[test]
    fn sim_time_applies_time_scale() {
        let mut clock = running_clock();
        clock.set_time_scale(10.0);
        clock.advance(0.0);
        clock.advance(2.0);
        assert!((clock.sim_time() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn reset_clears_elapsed() {
        let mut clock = running_clock();
        clock.advance(0.0);
        clock.advance(5.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.advance(9.0), Some(0.0));
    }
}
