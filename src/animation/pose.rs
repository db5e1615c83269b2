//! Discrete pose changes of the assembled cube.

use glam::Quat;
use serde::Serialize;

use super::easing::EasingFunction;
use crate::orientation::{Orientation, RotationOp};

/// Default speed at the start of a pose change (per second).
pub const DEFAULT_INITIAL_SPEED: f32 = 0.0;

/// Default speed gained on every tick while a pose change runs.
pub const DEFAULT_ACCELERATION: f32 = 0.5;

/// Smallest acceleration accepted when the initial speed is zero, so a pose
/// change always reaches its target.
pub const MIN_ACCELERATION: f32 = 0.05;

/// Whether a pose change is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseState {
    /// At rest in the current orientation.
    #[default]
    Idle,
    /// Rotating from the current toward the next orientation.
    Transitioning,
}

/// What happened to a pose request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RequestOutcome {
    /// A transition toward the requested orientation began.
    Started,
    /// A transition was already running; the request was dropped.
    Ignored,
}

/// Moves the cube between orientations with an accelerating slerp.
///
/// Requests made while a transition runs are dropped, never queued.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseTransitioner {
    current: Orientation,
    next: Orientation,
    state: PoseState,
    t: f32,
    speed: f32,
    initial_speed: f32,
    acceleration: f32,
    easing: EasingFunction,
}

impl Default for PoseTransitioner {
    fn default() -> Self {
        Self::new(Orientation::CANONICAL)
    }
}

impl PoseTransitioner {
    /// Idle at `orientation` with the default motion profile.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            current: orientation,
            next: orientation,
            state: PoseState::Idle,
            t: 0.0,
            speed: DEFAULT_INITIAL_SPEED,
            initial_speed: DEFAULT_INITIAL_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            easing: EasingFunction::Linear,
        }
    }

    /// Override the motion profile. Negative values are treated as zero.
    ///
    /// Starting from rest, the acceleration is raised to at least
    /// [`MIN_ACCELERATION`].
    #[must_use]
    pub fn with_motion(mut self, initial_speed: f32, acceleration: f32) -> Self {
        self.initial_speed = initial_speed.max(0.0);
        let floor = if self.initial_speed > 0.0 {
            0.0
        } else {
            MIN_ACCELERATION
        };
        self.acceleration = acceleration.max(floor);
        self.speed = self.initial_speed;
        self
    }

    /// Orientation the cube rests in (or is leaving).
    #[must_use]
    pub fn current(&self) -> Orientation {
        self.current
    }

    /// Orientation the cube is heading to; equals `current` when idle.
    #[must_use]
    pub fn next(&self) -> Orientation {
        self.next
    }

    /// Idle or transitioning.
    #[must_use]
    pub fn state(&self) -> PoseState {
        self.state
    }

    /// Shorthand for `state() == Transitioning`.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state == PoseState::Transitioning
    }

    /// Raw transition parameter in `[0, 1]`.
    #[must_use]
    pub fn t(&self) -> f32 {
        self.t.min(1.0)
    }

    /// Apply a quarter turn to the current orientation.
    pub fn request(&mut self, op: RotationOp) -> RequestOutcome {
        self.request_to(self.next.transition(op))
    }

    /// Move straight to `target`.
    pub fn request_to(&mut self, target: Orientation) -> RequestOutcome {
        if self.is_transitioning() {
            log::warn!("pose change to {target} ignored: already rotating");
            return RequestOutcome::Ignored;
        }
        self.next = target;
        self.t = 0.0;
        self.speed = self.initial_speed;
        self.state = PoseState::Transitioning;
        RequestOutcome::Started
    }

    /// Advance by `dt` seconds. Returns `true` on the tick the transition
    /// completes.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_transitioning() {
            return false;
        }
        let dt = dt.max(0.0);
        self.speed += self.acceleration;
        self.t += dt * self.speed;

        let same_target = self.current == self.next && dt > 0.0;
        if self.t < 1.0 && !same_target {
            return false;
        }
        log::info!("pose change {} -> {} complete", self.current, self.next);
        self.current = self.next;
        self.t = 1.0;
        self.speed = self.initial_speed;
        self.state = PoseState::Idle;
        true
    }

    /// Rotation to display this frame.
    #[must_use]
    pub fn displayed_rotation(&self) -> Quat {
        if !self.is_transitioning() {
            return self.current.rotation();
        }
        self.current
            .rotation()
            .slerp(self.next.rotation(), self.easing.evaluate(self.t))
    }
}
