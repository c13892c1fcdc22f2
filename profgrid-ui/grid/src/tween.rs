//! Time-driven interpolation of a single scalar.

/// Linear interpolation from `from` to `to` over `duration` seconds.
///
/// The tween does not own a clock: the caller advances it with
/// [`Tween::step`] from its own tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }

        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
