//! Implicit single-step integration of a damped harmonic oscillator.
//!
//! Solves `x'' + 2ζω x' + ω² (x - g) = 0` for one step of size `h` by
//! inverting the 2x2 system of the backward-Euler discretization in closed
//! form:
//!
//! ```text
//! det   = 1 + 2hζω + h²ω²
//! x'    = (f·x + h·v + h²ω²·g) / det       f = 1 + 2hζω
//! v'    = (v + hω²·(g - x)) / det
//! ```
//!
//! The result is stable for any `h >= 0`, which is what makes the kernel safe
//! to drive with a raw, spiky frame time.

use crate::config::SpringConfig;
use crate::float::Float;
use crate::vec::Vec;

/// What a single oscillator step did to the state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Regular integration step.
    Integrated,
    /// Angular frequency was below the freeze threshold; velocity zeroed.
    Frozen,
    /// Spring was close enough to rest that it snapped onto the target.
    Settled,
    /// Half-life was below its threshold; jumped to the target without integrating.
    Snapped,
}

/// Physical spring parameters: angular frequency (rad/s) and damping ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oscillator<F: Float> {
    pub angular_frequency: F,
    pub damping_ratio: F,
}

impl<F: Float> Oscillator<F> {
    pub fn new(angular_frequency: F, damping_ratio: F) -> Self {
        Oscillator { angular_frequency, damping_ratio }
    }

    /// Build from an ordinary frequency in Hz.
    pub fn from_frequency_hz(frequency_hz: F, damping_ratio: F) -> Self {
        Self::new(frequency_hz * F::tau(), damping_ratio)
    }

    /// Undamped oscillation period in seconds, or `None` at zero frequency.
    pub fn period(&self) -> Option<F> {
        if self.angular_frequency > F::zero() {
            Some(F::tau() / self.angular_frequency)
        } else {
            None
        }
    }

    /// Advance `(value, velocity)` toward `target` by `dt` seconds.
    ///
    /// Non-finite inputs propagate into the state unchanged; they are not
    /// clamped or reported.
    pub fn step<V>(
        &self,
        value: &mut V,
        velocity: &mut V,
        target: V,
        dt: F,
        config: &SpringConfig<F>,
    ) -> StepOutcome
    where
        V: Vec<Scalar = F>,
    {
        let omega = self.angular_frequency;
        if omega < config.freeze_epsilon {
            *velocity = V::zero();
            tracing::trace!(?omega, "spring frozen");
            return StepOutcome::Frozen;
        }

        let delta = target - *value;

        let f = F::one() + F::two() * dt * self.damping_ratio * omega;
        let oo = omega * omega;
        let hoo = dt * oo;
        let hhoo = dt * hoo;
        let det_inv = F::one() / (f + hhoo);
        // (f·x + h·v + hhoo·g) / det as an increment on x, so f32 can settle.
        let dx = velocity.scale(dt) + delta.scale(hhoo);
        let det_v = *velocity + delta.scale(hoo);

        *velocity = det_v.scale(det_inv);
        *value = *value + dx.scale(det_inv);

        if velocity.length() < config.settle_epsilon && delta.length() < config.settle_epsilon {
            *velocity = V::zero();
            *value = target;
            tracing::trace!("spring settled on target");
            return StepOutcome::Settled;
        }

        StepOutcome::Integrated
    }
}
