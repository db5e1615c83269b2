//! Time-driven state: fold progress and pose transitions.
//!
//! Both animators are advanced by explicit `tick(dt)` calls; nothing here
//! reads a clock.

pub mod easing;
pub mod fold;
pub mod pose;

pub use easing::EasingFunction;
pub use fold::{FoldAnimator, FoldMode, DEFAULT_AUTOPLAY_SPEED, FULL_PROGRESS};
pub use pose::{
    PoseState, PoseTransitioner, RequestOutcome, DEFAULT_ACCELERATION,
    DEFAULT_INITIAL_SPEED, MIN_ACCELERATION,
};
