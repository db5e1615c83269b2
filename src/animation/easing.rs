//! Easing curves for fold and pose interpolation.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// No easing.
    #[default]
    Linear,
    /// Half-period cosine: `(1 - cos(πt)) / 2`.
    SineInOut,
    /// Cubic ease-in for the first half, cubic ease-out for the second.
    CubicInOut,
}

impl EasingFunction {
    /// Evaluate the curve at `t`.
    ///
    /// Input is clamped to [0.0, 1.0]; the result is in [0.0, 1.0].
    #[must_use]
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::SineInOut => {
                (1.0 - (std::f32::consts::PI * t).cos()) * 0.5
            }
            EasingFunction::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 * 0.5
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) * 0.5
                }
            }
        }
    }
}
