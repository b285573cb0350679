#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

//! # Springroll
//!
//! Closed-form spring dampers for smooth, frame-rate independent motion.
//!
//! Springroll moves a scalar value toward a (possibly moving) goal by
//! evaluating the analytic solution of a damped harmonic oscillator. A
//! single evaluation per frame lands exactly on the continuous-time
//! trajectory no matter how long the frame took: there is no numerical
//! integration, so nothing explodes at large time steps and the motion
//! looks the same at 30, 60, or 240 FPS.
//!
//! The approach speed is tuned with a `halflife`, the time it takes for
//! the remaining distance to a resting goal to halve. The springy
//! variants additionally take a `frequency`, the number of oscillations
//! per second when under-damped.
//!
//! ## Example
//!
//! ```rust
//! use springroll::{damper, fps};
//!
//! let mut x = 0.0;
//!
//! // Chase 10.0 with a halflife of 0.25s, at 60 frames per second.
//! for _ in 0..120 {
//!     x = damper(x, 10.0, 0.25, fps(60));
//! }
//!
//! assert!((x - 10.0).abs() < 0.1);
//! ```
//!
//! ## Picking a variant
//!
//! - [`damper`]: first-order exponential decay. No velocity, never
//!   overshoots, cheapest.
//! - [`spring_damper`]: full second-order spring; bounces when the
//!   frequency sits above the critical boundary.
//! - [`critical_spring_damper`]: pinned to the critical boundary, reaches
//!   the goal as fast as possible without oscillating, and accounts for
//!   the goal's own velocity.
//! - [`critical_spring_damper_stationary`]: same, for goals that do not
//!   move between frames.
//! - [`double_spring_damper`]: two chained critical dampers for an even
//!   smoother, more organic approach.
//!
//! Or keep a [`Follower`] around and let it dispatch to the variant
//! selected by a [`Damping`] value:
//!
//! ```rust
//! use springroll::{Damping, Follower, fps};
//!
//! let mut camera_y = Follower::new(0.0, Damping::DoubleCritical, 0.5);
//!
//! for _ in 0..240 {
//!     camera_y.step(3.0, 0.0, fps(60));
//! }
//!
//! assert!((camera_y.position() - 3.0).abs() < 0.1);
//! ```
//!
//! ## Attribution
//!
//! The closed-form solutions follow Daniel Holden's spring damper
//! write-up: <https://theorangeduck.com/page/spring-roll-call>

mod damper;
mod follower;

pub use damper::{
    Motion, critical_frequency, critical_halflife, critical_spring_damper,
    critical_spring_damper_stationary, damper, damping_to_halflife, double_spring_damper,
    fast_negexp, fps, frequency_to_stiffness, halflife_to_damping, spring_damper,
    stiffness_to_frequency,
};
pub use follower::{Damping, Follower};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::damper::{
        Motion, critical_frequency, critical_halflife, critical_spring_damper,
        critical_spring_damper_stationary, damper, double_spring_damper, fps, spring_damper,
    };
    pub use crate::follower::{Damping, Follower};
}
