//! Tolerances used by the tracking operations.

use crate::error::SpringError;
use crate::float::Float;

/// Tolerance configuration for spring tracking.
///
/// The three thresholds default to the same value but are independent:
/// a caller animating values in the thousands will usually want a larger
/// settle epsilon without changing when a spring counts as frozen.
///
/// # Builder Pattern
/// ```
/// use numspring::config::SpringConfig;
///
/// let config: SpringConfig<f32> = SpringConfig::new()
///     .with_settle_epsilon(1e-3)
///     .with_freeze_epsilon(1e-6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig<F: Float> {
    /// Angular frequencies below this freeze the spring in place. Default: 1e-5.
    pub freeze_epsilon: F,
    /// Velocity and distance below this snap the spring onto its target. Default: 1e-5.
    pub settle_epsilon: F,
    /// Half-lives below this snap straight to the target. Default: 1e-5.
    pub half_life_epsilon: F,
}

/// Tolerance shared by all three thresholds unless overridden.
pub const DEFAULT_EPSILON: f32 = 1e-5;

impl<F: Float> SpringConfig<F> {
    /// Create a new config with default tolerances.
    pub fn new() -> Self {
        let eps = F::from_f32(DEFAULT_EPSILON);
        SpringConfig {
            freeze_epsilon: eps,
            settle_epsilon: eps,
            half_life_epsilon: eps,
        }
    }

    /// Set all three tolerances at once.
    pub fn with_epsilon(self, epsilon: F) -> Self {
        self.with_freeze_epsilon(epsilon)
            .with_settle_epsilon(epsilon)
            .with_half_life_epsilon(epsilon)
    }

    /// Set the zero-frequency threshold.
    pub fn with_freeze_epsilon(mut self, epsilon: F) -> Self {
        self.freeze_epsilon = epsilon;
        self
    }

    /// Set the convergence snap threshold.
    pub fn with_settle_epsilon(mut self, epsilon: F) -> Self {
        self.settle_epsilon = epsilon;
        self
    }

    /// Set the near-zero half-life threshold.
    pub fn with_half_life_epsilon(mut self, epsilon: F) -> Self {
        self.half_life_epsilon = epsilon;
        self
    }

    /// Check that every tolerance is finite and non-negative.
    pub fn validate(&self) -> Result<(), SpringError> {
        let ok = |eps: F| eps.is_finite() && eps >= F::zero();
        if ok(self.freeze_epsilon) && ok(self.settle_epsilon) && ok(self.half_life_epsilon) {
            Ok(())
        } else {
            Err(SpringError::InvalidEpsilon)
        }
    }
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
