//! Goal tracking with a selectable damping strategy.
//!
//! The closed-form routines in [`damper`](crate::damper) are pure and
//! stateless; this module adds the one piece of bookkeeping real callers
//! end up writing anyway: a value that remembers its own motion (and the
//! extra intermediate pair the double damper needs) and picks a strategy
//! per frame.

use crate::damper::{
    Motion, critical_spring_damper, critical_spring_damper_stationary, damper,
    double_spring_damper, spring_damper,
};

/// Damping strategy used by a [`Follower`].
///
/// All strategies are frame-rate independent; they differ in how the
/// approach feels and in which tuning parameters they respect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Damping {
    /// First-order exponential decay toward the goal. Velocity is neither
    /// used nor updated.
    Exponential,
    /// Full spring with a tunable oscillation `frequency`. Settings above
    /// the critical frequency bounce around the goal before settling.
    Spring {
        /// Oscillations per second.
        frequency: f64,
    },
    /// Critically damped spring that accounts for the goal's velocity.
    Critical,
    /// Critically damped spring that assumes the goal holds still.
    CriticalStationary,
    /// Two chained critical dampers; the smoothest option, at roughly
    /// twice the cost.
    DoubleCritical,
}

/// A scalar value that chases a moving goal.
///
/// `Follower` owns the state every strategy needs, including the hidden
/// intermediate pair used by [`Damping::DoubleCritical`], so strategies
/// can be switched between frames with no bookkeeping on the caller's
/// side.
///
/// A non-positive `halflife` (or `frequency` for [`Damping::Spring`])
/// means "do not damp": the step is skipped and the value holds still.
/// This mirrors an editor slider passing through zero and avoids driving
/// the epsilon-guarded denominators of the raw routines with an exact
/// zero.
///
/// # Example
///
/// ```rust
/// use springroll::{Damping, Follower, fps};
///
/// let mut follower = Follower::new(0.0, Damping::Critical, 0.25);
///
/// for _ in 0..120 {
///     follower.step(10.0, 0.0, fps(60));
/// }
///
/// assert!((follower.position() - 10.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    /// Damping strategy. May be changed between frames.
    pub damping: Damping,
    /// Time for the remaining distance to halve, in seconds.
    pub halflife: f64,
    motion: Motion,
    damped_goal: Motion,
}

impl Follower {
    /// Creates a follower at rest at `position`.
    pub fn new(position: f64, damping: Damping, halflife: f64) -> Self {
        Self {
            damping,
            halflife,
            motion: Motion::at_rest(position),
            damped_goal: Motion::at_rest(position),
        }
    }

    /// Current position.
    #[inline]
    pub const fn position(&self) -> f64 {
        self.motion.position
    }

    /// Current velocity.
    #[inline]
    pub const fn velocity(&self) -> f64 {
        self.motion.velocity
    }

    /// Teleports to `position`, clearing all velocity.
    pub fn reset(&mut self, position: f64) {
        self.motion = Motion::at_rest(position);
        self.damped_goal = Motion::at_rest(position);
    }

    /// Advances the follower `dt` seconds toward `goal`.
    ///
    /// `goal_velocity` is only consulted by the [`Damping::Spring`] and
    /// [`Damping::Critical`] strategies; pass `0.0` when unknown.
    ///
    /// Returns the new position.
    pub fn step(&mut self, goal: f64, goal_velocity: f64, dt: f64) -> f64 {
        if self.halflife <= 0.0 {
            return self.motion.position;
        }

        match self.damping {
            Damping::Exponential => {
                self.motion.position = damper(self.motion.position, goal, self.halflife, dt);
            }
            Damping::Spring { frequency } => {
                if frequency <= 0.0 {
                    return self.motion.position;
                }
                let (p, v) = spring_damper(
                    self.motion.position,
                    self.motion.velocity,
                    goal,
                    goal_velocity,
                    frequency,
                    self.halflife,
                    dt,
                );
                self.motion = Motion::new(p, v);
            }
            Damping::Critical => {
                let (p, v) = critical_spring_damper(
                    self.motion.position,
                    self.motion.velocity,
                    goal,
                    goal_velocity,
                    self.halflife,
                    dt,
                );
                self.motion = Motion::new(p, v);
            }
            Damping::CriticalStationary => {
                let (p, v) = critical_spring_damper_stationary(
                    self.motion.position,
                    self.motion.velocity,
                    goal,
                    self.halflife,
                    dt,
                );
                self.motion = Motion::new(p, v);
            }
            Damping::DoubleCritical => {
                let (motion, damped_goal) =
                    double_spring_damper(self.motion, self.damped_goal, goal, self.halflife, dt);
                self.motion = motion;
                self.damped_goal = damped_goal;

                return self.motion.position;
            }
        }

        // Keep the intermediate pinned to the raw goal so a later switch
        // to DoubleCritical chases from where the goal actually is.
        self.damped_goal = Motion::at_rest(goal);

        self.motion.position
    }
}
