/// A closed range of `f32` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// The closed unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Everything in front of a ray origin, [0, inf].
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    /// The range of an 8-bit color channel.
    pub const BYTE: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };
}
