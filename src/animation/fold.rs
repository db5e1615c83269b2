//! Fold/unfold progress and per-hinge fold angles.

use std::f32::consts::FRAC_PI_2;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;

/// Progress of a fully folded cube.
pub const FULL_PROGRESS: f32 = 100.0;

/// Length of one unfold/fold cycle of the ping-pong accumulator.
const CYCLE: f32 = 2.0 * FULL_PROGRESS;

/// Default autoplay speed in progress units per second.
pub const DEFAULT_AUTOPLAY_SPEED: f32 = 20.0;

/// How hinge angles are derived from the global progress.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FoldMode {
    /// All hinges move together with a sine in/out curve.
    #[default]
    Simultaneous,
    /// Hinges fold one after another, starting next to the base face.
    RootFirst,
    /// Hinges fold one after another, starting at the outermost one.
    LeafFirst,
}

impl FoldMode {
    /// Every mode.
    pub const ALL: [FoldMode; 3] =
        [FoldMode::Simultaneous, FoldMode::RootFirst, FoldMode::LeafFirst];

    /// Name shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FoldMode::Simultaneous => "Blossom",
            FoldMode::RootFirst => "Waving",
            FoldMode::LeafFirst => "Rolling",
        }
    }
}

/// Drives the fold progress, either from direct input or by autoplay.
///
/// Progress runs from 0 (flat net) to 100 (closed cube). Autoplay advances a
/// ping-pong accumulator over `[0, 200)` so the net folds and unfolds
/// continuously.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldAnimator {
    mode: FoldMode,
    progress: f32,
    autoplay: bool,
    cycle: f32,
    speed: f32,
}

impl Default for FoldAnimator {
    fn default() -> Self {
        Self::new(FoldMode::default(), FULL_PROGRESS)
    }
}

impl FoldAnimator {
    /// Animator with autoplay off.
    #[must_use]
    pub fn new(mode: FoldMode, progress: f32) -> Self {
        let progress = progress.clamp(0.0, FULL_PROGRESS);
        Self {
            mode,
            progress,
            autoplay: false,
            cycle: progress,
            speed: DEFAULT_AUTOPLAY_SPEED,
        }
    }

    /// Set the autoplay speed (progress units per second, never negative).
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.set_speed(speed);
        self
    }

    /// Current fold mode.
    #[must_use]
    pub fn mode(&self) -> FoldMode {
        self.mode
    }

    /// Current progress in `[0, 100]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether autoplay is running.
    #[must_use]
    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    /// Autoplay speed in progress units per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Fully folded and at rest.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.progress == FULL_PROGRESS && !self.autoplay
    }

    /// Switch modes; the cube closes again.
    pub fn set_mode(&mut self, mode: FoldMode) {
        self.mode = mode;
        self.reset(FULL_PROGRESS);
    }

    /// Jump to `progress`, clamped to `[0, 100]`.
    pub fn set_progress(&mut self, progress: f32) {
        let progress = if progress.is_nan() { 0.0 } else { progress };
        self.reset(progress.clamp(0.0, FULL_PROGRESS));
    }

    /// Start or stop autoplay. Starting continues from the current progress.
    pub fn set_autoplay(&mut self, autoplay: bool) {
        if autoplay {
            self.cycle = self.progress;
        }
        self.autoplay = autoplay;
    }

    /// Set the autoplay speed (never negative).
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Put both progress and the accumulator at `progress`.
    pub(crate) fn reset(&mut self, progress: f32) {
        self.progress = progress;
        self.cycle = progress;
    }

    /// Advance autoplay by `dt` seconds. No-op when autoplay is off or `dt`
    /// is not a positive finite number.
    pub fn tick(&mut self, dt: f32) {
        if !self.autoplay || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.cycle = (self.cycle + dt * self.speed).rem_euclid(CYCLE);
        self.progress = self.cycle.min(CYCLE - self.cycle);
    }

    /// Eased fold fraction of hinge `index` out of `count`, in `[0, 1]`.
    #[must_use]
    pub fn hinge_fraction(&self, index: usize, count: usize) -> f32 {
        let t = self.progress / FULL_PROGRESS;
        let slot = match self.mode {
            FoldMode::Simultaneous => {
                return EasingFunction::SineInOut.evaluate(t);
            }
            FoldMode::RootFirst => index,
            FoldMode::LeafFirst => count.saturating_sub(index + 1),
        };
        let window = FULL_PROGRESS / count.max(1) as f32;
        let local = (self.progress - slot as f32 * window) / window;
        EasingFunction::CubicInOut.evaluate(local)
    }

    /// Fold angles in radians for `count` hinges in hierarchy order.
    #[must_use]
    pub fn angles(&self, count: usize) -> Vec<f32> {
        (0..count)
            .map(|i| self.hinge_fraction(i, count) * FRAC_PI_2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn degrees(animator: &FoldAnimator) -> Vec<f32> {
        animator.angles(5).into_iter().map(f32::to_degrees).collect()
    }

    #[test]
    fn test_endpoints_in_every_mode() {
        for mode in FoldMode::ALL {
            let mut a = FoldAnimator::new(mode, 0.0);
            assert!(degrees(&a).iter().all(|d| d.abs() < EPS), "{mode:?}");
            a.set_progress(100.0);
            assert!(
                degrees(&a).iter().all(|d| (d - 90.0).abs() < 1e-3),
                "{mode:?}"
            );
        }
    }

    #[test]
    fn test_root_first_windows() {
        let mut a = FoldAnimator::new(FoldMode::RootFirst, 0.0);
        let mut samples = Vec::new();
        for p in [0.0, 50.0, 100.0] {
            a.set_progress(p);
            let d = degrees(&a);
            samples.push((d[0], d[4]));
        }
        let expected = [(0.0, 0.0), (90.0, 0.0), (90.0, 90.0)];
        for ((h0, h4), (e0, e4)) in samples.into_iter().zip(expected) {
            assert!((h0 - e0).abs() < 1e-3 && (h4 - e4).abs() < 1e-3);
        }

        // Middle of the third window: half folded.
        a.set_progress(50.0);
        assert!((degrees(&a)[2] - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_leaf_first_reverses_windows() {
        let mut root = FoldAnimator::new(FoldMode::RootFirst, 0.0);
        let mut leaf = FoldAnimator::new(FoldMode::LeafFirst, 0.0);
        for p in [10.0, 33.0, 50.0, 71.0, 95.0] {
            root.set_progress(p);
            leaf.set_progress(p);
            let mut r = root.angles(5);
            r.reverse();
            assert_eq!(r, leaf.angles(5));
        }
    }

    #[test]
    fn test_simultaneous_uses_sine_curve() {
        let a = FoldAnimator::new(FoldMode::Simultaneous, 25.0);
        let expected = EasingFunction::SineInOut.evaluate(0.25) * FRAC_PI_2;
        assert!(a.angles(5).iter().all(|v| (v - expected).abs() < EPS));
    }

    #[test]
    fn test_progress_clamped() {
        let mut a = FoldAnimator::default();
        a.set_progress(140.0);
        assert_eq!(a.progress(), 100.0);
        a.set_progress(-3.0);
        assert_eq!(a.progress(), 0.0);
        a.set_progress(f32::NAN);
        assert_eq!(a.progress(), 0.0);
    }

    #[test]
    fn test_autoplay_ping_pong() {
        let mut a = FoldAnimator::new(FoldMode::Simultaneous, 0.0);
        a.set_autoplay(true);
        a.tick(1.0);
        assert!((a.progress() - 20.0).abs() < EPS);
        a.tick(4.0);
        assert!((a.progress() - 100.0).abs() < EPS);
        a.tick(1.0);
        assert!((a.progress() - 80.0).abs() < EPS);
        // Wraps back to the flat net after a full cycle.
        a.tick(4.0);
        assert!(a.progress().abs() < EPS);
        a.tick(0.5);
        assert!((a.progress() - 10.0).abs() < EPS);
    }

    #[test]
    fn test_autoplay_resumes_from_current_progress() {
        let mut a = FoldAnimator::new(FoldMode::RootFirst, 100.0);
        assert!(a.is_closed());
        a.set_progress(40.0);
        a.set_autoplay(true);
        assert!(!a.is_closed());
        a.tick(0.5);
        assert!((a.progress() - 50.0).abs() < EPS);
    }

    #[test]
    fn test_tick_without_autoplay_is_noop() {
        let mut a = FoldAnimator::new(FoldMode::LeafFirst, 30.0);
        a.tick(10.0);
        assert_eq!(a.progress(), 30.0);
        a.set_autoplay(true);
        a.tick(-1.0);
        assert_eq!(a.progress(), 30.0);
    }

    #[test]
    fn test_non_finite_dt_ignored() {
        let mut a = FoldAnimator::new(FoldMode::Simultaneous, 40.0);
        a.set_autoplay(true);
        for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            a.tick(dt);
            assert_eq!(a.progress(), 40.0, "{dt}");
        }
        a.tick(0.1);
        assert!((a.progress() - 42.0).abs() < EPS);
        assert!(a.angles(5).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_set_mode_closes_cube() {
        let mut a = FoldAnimator::new(FoldMode::Simultaneous, 10.0);
        a.set_mode(FoldMode::LeafFirst);
        assert_eq!(a.mode(), FoldMode::LeafFirst);
        assert_eq!(a.progress(), FULL_PROGRESS);
    }

    #[test]
    fn test_mode_labels_and_serde() {
        assert_eq!(FoldMode::RootFirst.label(), "Waving");
        let json = serde_json::to_string(&FoldMode::LeafFirst).unwrap();
        assert_eq!(json, "\"leaf_first\"");
    }
}
