//! User-facing spring parameterizations.
//!
//! Each variant resolves to an [`Oscillator`] (angular frequency plus damping
//! ratio), or to an immediate snap when the half-life is effectively zero.

use crate::config::SpringConfig;
use crate::error::SpringError;
use crate::float::Float;
use crate::oscillator::Oscillator;

/// How a spring is parameterized for a tracking step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tracking<F: Float> {
    /// Raw physical parameters: ω in rad/s and damping ratio ζ.
    DampingRatio { angular_frequency: F, damping_ratio: F },
    /// Oscillation frequency in Hz plus the time for the envelope to halve.
    HalfLife { frequency_hz: F, half_life: F },
    /// Critically damped exponential approach with the given half-life.
    Exponential { half_life: F },
}

fn check<F: Float>(v: F, err: SpringError) -> Result<F, SpringError> {
    if v.is_finite() && v >= F::zero() {
        Ok(v)
    } else {
        Err(err)
    }
}

impl<F: Float> Tracking<F> {
    /// Checked `DampingRatio` constructor.
    pub fn damping_ratio(angular_frequency: F, damping_ratio: F) -> Result<Self, SpringError> {
        Ok(Tracking::DampingRatio {
            angular_frequency: check(angular_frequency, SpringError::InvalidFrequency)?,
            damping_ratio: check(damping_ratio, SpringError::InvalidDampingRatio)?,
        })
    }

    /// Checked `HalfLife` constructor.
    ///
    /// Any finite frequency is accepted; zero or negative frequencies resolve
    /// to an angular frequency below the freeze threshold.
    pub fn half_life(frequency_hz: F, half_life: F) -> Result<Self, SpringError> {
        if !frequency_hz.is_finite() {
            return Err(SpringError::InvalidFrequency);
        }
        Ok(Tracking::HalfLife {
            frequency_hz,
            half_life: check(half_life, SpringError::InvalidHalfLife)?,
        })
    }

    /// Checked `Exponential` constructor.
    pub fn exponential(half_life: F) -> Result<Self, SpringError> {
        Ok(Tracking::Exponential {
            half_life: check(half_life, SpringError::InvalidHalfLife)?,
        })
    }

    /// Convert to oscillator parameters.
    ///
    /// Returns `None` when the half-life is below `config.half_life_epsilon`,
    /// meaning the spring should jump straight to its target.
    pub fn resolve(&self, config: &SpringConfig<F>) -> Option<Oscillator<F>> {
        match *self {
            Tracking::DampingRatio { angular_frequency, damping_ratio } => {
                Some(Oscillator::new(angular_frequency, damping_ratio))
            }
            Tracking::HalfLife { frequency_hz, half_life } => {
                if half_life < config.half_life_epsilon {
                    return None;
                }
                let omega = frequency_hz * F::tau();
                Some(Oscillator::new(omega, F::ln_2() / (omega * half_life)))
            }
            Tracking::Exponential { half_life } => {
                if half_life < config.half_life_epsilon {
                    return None;
                }
                Some(Oscillator::new(F::ln_2() / half_life, F::one()))
            }
        }
    }
}
