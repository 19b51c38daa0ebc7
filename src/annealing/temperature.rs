//! Geometric cooling with reheating.

/// Temperature schedule: geometric decay with a reheat floor.
///
/// Each step multiplies the temperature by the decay factor; when it
/// drops below the floor it is reheated to half the initial temperature
/// rather than freezing, keeping late-attempt uphill moves possible.
#[derive(Debug, Clone)]
pub struct Temperature {
    initial: f64,
    decay: f64,
    floor: f64,
    current: f64,
}

impl Temperature {
    /// Creates a schedule starting at `initial`.
    pub fn new(initial: f64, decay: f64, floor: f64) -> Self {
        Self {
            initial,
            decay,
            floor,
            current: initial,
        }
    }

    /// Current temperature.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Applies one decay step, reheating at the floor.
    pub fn step(&mut self) {
        self.current *= self.decay;
        if self.current < self.floor {
            self.current = self.initial * 0.5;
        }
    }

    /// Resets to the initial temperature (new attempt).
    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}
