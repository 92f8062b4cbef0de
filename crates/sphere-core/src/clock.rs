use std::f32::consts::TAU;

/// Per-frame output of the animation clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockTick {
    pub rotation_delta: f32,
    pub pulse_scale: f32,
}

/// Idle rotation and breathing pulse of the panel group.
///
/// Rotation only advances while the user is not driving the camera; the
/// angle is kept, not reset, while suspended. The pulse follows wall-clock
/// time and never stops.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    rotation_angle: f32,
    elapsed: f64,
    started_at: Option<f64>,
    rotation_per_tick: f32,
    pulse_amplitude: f32,
    pulse_rate: f64,
}

impl AnimationClock {
    pub fn new(rotation_per_tick: f32, pulse_amplitude: f32, pulse_rate: f64) -> Self {
        Self {
            rotation_angle: 0.0,
            elapsed: 0.0,
            started_at: None,
            rotation_per_tick,
            pulse_amplitude,
            pulse_rate,
        }
    }

    pub fn from_config(config: &crate::SphereConfig) -> Self {
        Self::new(
            config.rotation_per_tick,
            config.pulse_amplitude,
            config.pulse_rate,
        )
    }

    /// Advance one frame. `now` is wall-clock seconds and must not decrease.
    pub fn tick(&mut self, now: f64, user_driving: bool) -> ClockTick {
        let start = *self.started_at.get_or_insert(now);
        self.elapsed = now - start;

        let rotation_delta = if user_driving {
            0.0
        } else {
            self.rotation_per_tick
        };
        self.rotation_angle = (self.rotation_angle + rotation_delta).rem_euclid(TAU);

        ClockTick {
            rotation_delta,
            pulse_scale: self.pulse_at(now),
        }
    }

    /// Group scale factor at wall-clock time `now`.
    #[inline]
    pub fn pulse_at(&self, now: f64) -> f32 {
        let wave = (now * self.pulse_rate).sin();
        (1.0 + self.pulse_amplitude as f64 * wave) as f32
    }

    /// Accumulated group yaw in `[0, 2π)`.
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Seconds since the first tick.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
