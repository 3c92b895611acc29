/// A channel value that bounces between 0 and 1 by a fixed step per frame.
///
/// The direction flips once the value has left `[0, 1]`, so it overshoots
/// by at most one step on either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPulse {
    pub value: f32,
    pub increment: f32,
    step: f32,
}

impl Default for ColorPulse {
    fn default() -> Self {
        Self::new(0.0, 0.05)
    }
}

impl ColorPulse {
    pub fn new(value: f32, step: f32) -> Self {
        ColorPulse {
            value,
            increment: step,
            step,
        }
    }

    /// Advance one frame and return the new value.
    pub fn advance(&mut self) -> f32 {
        if self.value > 1.0 {
            self.increment = -self.step;
        } else if self.value < 0.0 {
            self.increment = self.step;
        }
        self.value += self.increment;
        self.value
    }
}
