//! Closed-form damper evaluation.
//!
//! Every routine here advances a damped value by evaluating the exact
//! solution of the underlying differential equation at `t = dt`. The
//! continuous-time trajectory is merely sampled, so stepping once by `dt`
//! lands on the same state as stepping twice by `dt / 2`, and no step size
//! can make the system unstable.
//!
//! The second-order variants solve `x'' = -s (x - c) - d x'`, with the
//! stiffness `s` derived from an oscillation frequency, the damping `d`
//! derived from a halflife, and the equilibrium `c` shifted to absorb the
//! goal's own velocity.

use core::f64::consts::{LN_2, PI};

/// Guard added to denominators so an exactly-zero tuning parameter cannot
/// divide by zero. Callers should still treat a zero `halflife` or
/// `frequency` as "do not damp"; [`Follower`](crate::Follower) implements
/// that policy.
const EPSILON: f64 = f64::EPSILON;

/// Returns a time delta for a given number of frames per second.
///
/// This value can be used as the `dt` of the damper routines when running
/// at a fixed frame rate. Note that game engines usually provide a measured
/// time delta as well, which you should prefer when available.
///
/// # Example
///
/// ```rust
/// use springroll::{damper, fps};
///
/// let x = damper(0.0, 1.0, 0.1, fps(60));
/// ```
#[inline]
pub fn fps(n: u32) -> f64 {
    1.0 / n as f64
}

/// Position and velocity of a damped scalar.
///
/// The damper routines are pure functions and the caller owns all state.
/// `Motion` packages one state pair for the variants that carry more than
/// one of them, like [`double_spring_damper`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    /// Current position.
    pub position: f64,
    /// Current velocity.
    pub velocity: f64,
}

impl Motion {
    /// Creates a motion state from a position and velocity.
    #[inline]
    pub const fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Creates a motion state at rest at `position`.
    #[inline]
    pub const fn at_rest(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }
}

/// Fast approximation of `e^(-x)` for non-negative `x`.
///
/// Evaluates the rational `1 / (1 + x + 0.48x² + 0.235x³)`, which stays
/// within a fraction of a percent of the true exponential for the decay
/// rates and frame times the dampers produce (`x` up to about 1) and
/// avoids a transcendental call on the per-frame path. The result stays in
/// `(0, 1]` for any `x >= 0`.
#[inline]
pub fn fast_negexp(x: f64) -> f64 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Converts a halflife to the damping coefficient of the oscillator.
#[inline]
pub fn halflife_to_damping(halflife: f64) -> f64 {
    (4.0 * LN_2) / (halflife + EPSILON)
}

/// Converts a damping coefficient back to a halflife.
#[inline]
pub fn damping_to_halflife(damping: f64) -> f64 {
    (4.0 * LN_2) / (damping + EPSILON)
}

/// Converts an oscillation frequency, in oscillations per second, to the
/// stiffness of the spring.
#[inline]
pub fn frequency_to_stiffness(frequency: f64) -> f64 {
    square(2.0 * PI * frequency)
}

/// Converts a spring stiffness back to an oscillation frequency.
#[inline]
pub fn stiffness_to_frequency(stiffness: f64) -> f64 {
    sqrt(stiffness) / (2.0 * PI)
}

/// Returns the halflife at which a spring with the given `frequency` sits
/// exactly on the critically damped boundary (`damping² = 4·stiffness`).
#[inline]
pub fn critical_halflife(frequency: f64) -> f64 {
    damping_to_halflife(sqrt(frequency_to_stiffness(frequency) * 4.0))
}

/// Returns the frequency at which a spring with the given `halflife` sits
/// exactly on the critically damped boundary.
#[inline]
pub fn critical_frequency(halflife: f64) -> f64 {
    stiffness_to_frequency(square(halflife_to_damping(halflife)) / 4.0)
}

/// First-order exponential decay toward `goal`.
///
/// The distance to the goal halves every `halflife` seconds of accumulated
/// `dt`, no matter how that time is split into frames. There is no
/// velocity and the value can never overshoot.
///
/// # Example
///
/// ```rust
/// use springroll::damper;
///
/// // After exactly one halflife, half the distance remains.
/// let x = damper(0.0, 10.0, 0.5, 0.5);
/// assert!((x - 5.0).abs() < 0.05);
/// ```
#[inline]
pub fn damper(x: f64, goal: f64, halflife: f64, dt: f64) -> f64 {
    // Keep values in a legal range
    let halflife = halflife.max(0.0);
    let dt = dt.max(0.0);

    lerp(x, goal, 1.0 - fast_negexp((LN_2 * dt) / (halflife + EPSILON)))
}

/// Spring toward a moving goal with tunable `frequency` and `halflife`.
///
/// `frequency` controls how many oscillations happen per second and
/// `halflife` how quickly the motion dies down. Depending on where the
/// two land relative to the critical boundary, the closed form takes one
/// of three shapes:
///
/// - under-damped: oscillates around the goal while decaying
/// - critically damped: fastest approach that never oscillates
/// - over-damped: slower approach, no oscillation
///
/// Compare `frequency` against [`critical_frequency`] of the halflife to
/// know which regime a pair of parameters selects.
///
/// Returns the `(position, velocity)` state after `dt`.
///
/// # Example
///
/// ```rust
/// use springroll::{fps, spring_damper};
///
/// let (mut x, mut v) = (0.0, 0.0);
///
/// // A bouncy approach: 2 oscillations per second, damped over 0.5s.
/// for _ in 0..240 {
///     (x, v) = spring_damper(x, v, 10.0, 0.0, 2.0, 0.5, fps(60));
/// }
///
/// assert!((x - 10.0).abs() < 0.1);
/// ```
pub fn spring_damper(
    x: f64,
    v: f64,
    goal: f64,
    goal_velocity: f64,
    frequency: f64,
    halflife: f64,
    dt: f64,
) -> (f64, f64) {
    // Keep values in a legal range
    let frequency = frequency.max(0.0);
    let halflife = halflife.max(0.0);
    let dt = dt.max(0.0);

    let s = frequency_to_stiffness(frequency);
    let d = halflife_to_damping(halflife);
    let c = goal + (d * goal_velocity) / (s + EPSILON);
    let y = d / 2.0;
    let regime = s - (d * d) / 4.0;

    if abs(regime) < EPSILON {
        // Critically damped
        let j0 = x - c;
        let j1 = v + j0 * y;

        let eydt = fast_negexp(y * dt);

        (eydt * (j0 + j1 * dt) + c, eydt * (v - j1 * y * dt))
    } else if regime > 0.0 {
        // Under-damped
        let w = sqrt(regime);
        let j0 = x - c;
        let j = sqrt(square(v + j0 * y) / (w * w + EPSILON) + square(j0));
        let j = if j0 > 0.0 { j } else { -j };
        let p = atan((v + j0 * y) / (-j0 * w + EPSILON));

        let eydt = fast_negexp(y * dt);
        let cos_wtp = cos(w * dt + p);
        let sin_wtp = sin(w * dt + p);

        (
            j * eydt * cos_wtp + c,
            -y * j * eydt * cos_wtp - w * j * eydt * sin_wtp,
        )
    } else {
        // Over-damped
        let r = sqrt(d * d - 4.0 * s);
        let y0 = (d + r) / 2.0;
        let y1 = (d - r) / 2.0;
        let j1 = (c * y0 - x * y0 - v) / (y1 - y0);
        let j0 = x - j1 - c;

        let ey0dt = fast_negexp(y0 * dt);
        let ey1dt = fast_negexp(y1 * dt);

        (
            j0 * ey0dt + j1 * ey1dt + c,
            -y0 * j0 * ey0dt - y1 * j1 * ey1dt,
        )
    }
}

/// Critically damped spring toward a goal that may itself be moving.
///
/// The oscillation frequency is pinned to the critical boundary by
/// construction rather than by branch selection, so the approach is as
/// fast as possible without oscillating and only `halflife` tunes it.
///
/// Returns the `(position, velocity)` state after `dt`.
pub fn critical_spring_damper(
    x: f64,
    v: f64,
    goal: f64,
    goal_velocity: f64,
    halflife: f64,
    dt: f64,
) -> (f64, f64) {
    // Keep values in a legal range
    let halflife = halflife.max(0.0);
    let dt = dt.max(0.0);

    let d = halflife_to_damping(halflife);
    let c = goal + (d * goal_velocity) / ((d * d) / 4.0);
    let y = d / 2.0;
    let j0 = x - c;
    let j1 = v + j0 * y;

    let eydt = fast_negexp(y * dt);

    (eydt * (j0 + j1 * dt) + c, eydt * (v - j1 * y * dt))
}

/// Critically damped spring toward a stationary goal.
///
/// With no goal velocity the equilibrium collapses onto the goal itself,
/// which drops a division from [`critical_spring_damper`]. The natural
/// choice for goals that are not predicted to move.
///
/// Returns the `(position, velocity)` state after `dt`.
///
/// # Example
///
/// ```rust
/// use springroll::{critical_spring_damper_stationary, fps};
///
/// let (mut x, mut v) = (0.0, 0.0);
///
/// for _ in 0..120 {
///     (x, v) = critical_spring_damper_stationary(x, v, 10.0, 0.25, fps(60));
/// }
///
/// assert!((x - 10.0).abs() < 0.1);
/// ```
pub fn critical_spring_damper_stationary(
    x: f64,
    v: f64,
    goal: f64,
    halflife: f64,
    dt: f64,
) -> (f64, f64) {
    // Keep values in a legal range
    let halflife = halflife.max(0.0);
    let dt = dt.max(0.0);

    let y = halflife_to_damping(halflife) / 2.0;
    let j0 = x - goal;
    let j1 = v + j0 * y;

    let eydt = fast_negexp(y * dt);

    (eydt * (j0 + j1 * dt) + goal, eydt * (v - j1 * y * dt))
}

/// Two critical dampers chained in series, for extra smoothness.
///
/// The goal is first damped into an intermediate `damped_goal` state, and
/// the visible value chases that intermediate instead, each stage using
/// half the requested halflife. The result is a fourth-order low-pass with
/// a much gentler start than a single critical damper, at roughly twice
/// the cost.
///
/// Both `Motion` pairs must survive between frames on the caller's side;
/// [`Follower`](crate::Follower) bundles them if you would rather not
/// carry the extra pair around.
///
/// Returns the updated `(motion, damped_goal)` pair.
pub fn double_spring_damper(
    motion: Motion,
    damped_goal: Motion,
    goal: f64,
    halflife: f64,
    dt: f64,
) -> (Motion, Motion) {
    let (gp, gv) = critical_spring_damper_stationary(
        damped_goal.position,
        damped_goal.velocity,
        goal,
        0.5 * halflife,
        dt,
    );
    let (p, v) =
        critical_spring_damper_stationary(motion.position, motion.velocity, gp, 0.5 * halflife, dt);

    (Motion::new(p, v), Motion::new(gp, gv))
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn square(x: f64) -> f64 {
    x * x
}

// Math helper functions that work in both std and no_std environments

#[cfg(feature = "std")]
#[inline]
fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[cfg(not(feature = "std"))]
#[inline]
fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[cfg(feature = "std")]
#[inline]
fn cos(x: f64) -> f64 {
    x.cos()
}

#[cfg(not(feature = "std"))]
#[inline]
fn cos(x: f64) -> f64 {
    libm::cos(x)
}

#[cfg(feature = "std")]
#[inline]
fn atan(x: f64) -> f64 {
    x.atan()
}

#[cfg(not(feature = "std"))]
#[inline]
fn atan(x: f64) -> f64 {
    libm::atan(x)
}

#[cfg(feature = "std")]
#[inline]
fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
fn abs(x: f64) -> f64 {
    libm::fabs(x)
}
