//! Spring state that tracks a moving target, one frame at a time.
//!
//! The caller owns the state, resets it once, then calls one `track_*` method
//! per simulation step with the current target and elapsed time. Each call
//! mutates `(value, velocity)` in place and returns the new value.

use crate::config::SpringConfig;
use crate::float::Float;
use crate::oscillator::StepOutcome;
use crate::quat::Quat;
use crate::tracking::Tracking;
use crate::vec::Vec;
use crate::vec::{Scalar, Vec2, Vec3, Vec4};

/// Value and velocity of a damped spring.
///
/// Plain data: copy it, store it in an array, upload it. The velocity is a
/// rate of change and is never normalized.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct SpringState<V: Vec> {
    pub value: V,
    pub velocity: V,
}

impl<V: Vec> SpringState<V> {
    /// Zero value, zero velocity.
    pub fn new() -> Self {
        SpringState { value: V::zero(), velocity: V::zero() }
    }

    /// Start at rest at `value`.
    pub fn at(value: V) -> Self {
        SpringState { value, velocity: V::zero() }
    }

    /// Start at `value` moving with `velocity`.
    pub fn with_velocity(value: V, velocity: V) -> Self {
        SpringState { value, velocity }
    }

    pub fn value(&self) -> V { self.value }
    pub fn velocity(&self) -> V { self.velocity }

    pub fn reset(&mut self) {
        self.value = V::zero();
        self.velocity = V::zero();
    }

    pub fn reset_to(&mut self, value: V) {
        self.value = value;
        self.velocity = V::zero();
    }

    pub fn reset_with(&mut self, value: V, velocity: V) {
        self.value = value;
        self.velocity = velocity;
    }

    /// Advance one step and report which branch the step took.
    pub fn advance(
        &mut self,
        target: V,
        tracking: Tracking<V::Scalar>,
        dt: V::Scalar,
        config: &SpringConfig<V::Scalar>,
    ) -> StepOutcome {
        match tracking.resolve(config) {
            Some(osc) => osc.step(&mut self.value, &mut self.velocity, target, dt, config),
            None => {
                tracing::trace!("half-life below epsilon, snapping to target");
                self.snap_to(target);
                StepOutcome::Snapped
            }
        }
    }

    /// Advance one step with an explicit parameterization and tolerances.
    pub fn track(
        &mut self,
        target: V,
        tracking: Tracking<V::Scalar>,
        dt: V::Scalar,
        config: &SpringConfig<V::Scalar>,
    ) -> V {
        self.advance(target, tracking, dt, config);
        self.value
    }

    /// Track with angular frequency `ω` (rad/s) and damping ratio `ζ`.
    pub fn track_damping_ratio(
        &mut self,
        target: V,
        angular_frequency: V::Scalar,
        damping_ratio: V::Scalar,
        dt: V::Scalar,
    ) -> V {
        let tracking = Tracking::DampingRatio { angular_frequency, damping_ratio };
        self.track(target, tracking, dt, &SpringConfig::new())
    }

    /// Track with an oscillation frequency in Hz and an envelope half-life in seconds.
    pub fn track_half_life(
        &mut self,
        target: V,
        frequency_hz: V::Scalar,
        half_life: V::Scalar,
        dt: V::Scalar,
    ) -> V {
        let tracking = Tracking::HalfLife { frequency_hz, half_life };
        self.track(target, tracking, dt, &SpringConfig::new())
    }

    /// Exponential approach without overshoot; halves the distance every `half_life` seconds.
    pub fn track_exponential(&mut self, target: V, half_life: V::Scalar, dt: V::Scalar) -> V {
        let tracking = Tracking::Exponential { half_life };
        self.track(target, tracking, dt, &SpringConfig::new())
    }

    pub fn is_settled(&self, target: V, eps_pos: V::Scalar, eps_vel: V::Scalar) -> bool {
        let offset = self.value - target;
        offset.length_sq() < eps_pos * eps_pos
            && self.velocity.length_sq() < eps_vel * eps_vel
    }

    pub fn snap_to(&mut self, target: V) {
        self.value = target;
        self.velocity = V::zero();
    }
}

pub type Spring1D<F> = SpringState<Scalar<F>>;
pub type Spring2D<F> = SpringState<Vec2<F>>;
pub type Spring3D<F> = SpringState<Vec3<F>>;
pub type Spring4D<F> = SpringState<Vec4<F>>;

/// Spring over rotations.
///
/// Integrates the quaternion components as a plain 4-vector and projects back
/// onto unit length when read. This is a linear-space approximation: accurate
/// for the small per-frame differences a tracking spring sees, not a true
/// angular-velocity integrator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct SpringQuat<F: Float> {
    value: Vec4<F>,
    velocity: Vec4<F>,
}

impl<F: Float> SpringQuat<F> {
    /// Identity rotation at rest.
    pub fn new() -> Self {
        Self::at(Quat::identity())
    }

    pub fn at(value: Quat<F>) -> Self {
        SpringQuat { value: value.to_vector(), velocity: Vec4::zero() }
    }

    pub fn with_velocity(value: Quat<F>, velocity: Quat<F>) -> Self {
        SpringQuat { value: value.to_vector(), velocity: velocity.to_vector() }
    }

    /// Current rotation, normalized.
    pub fn value(&self) -> Quat<F> {
        Quat::from_vector(self.value, true)
    }

    /// Current rate of change of the encoded rotation. Not a rotation itself.
    pub fn velocity(&self) -> Quat<F> {
        Quat::from_vector(self.velocity, false)
    }

    pub fn set_value(&mut self, value: Quat<F>) {
        self.value = value.to_vector();
    }

    pub fn set_velocity(&mut self, velocity: Quat<F>) {
        self.velocity = velocity.to_vector();
    }

    /// Raw encoded state, for hosts that store or upload it directly.
    pub fn raw(&self) -> (Vec4<F>, Vec4<F>) {
        (self.value, self.velocity)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn reset_to(&mut self, value: Quat<F>) {
        *self = Self::at(value);
    }

    pub fn reset_with(&mut self, value: Quat<F>, velocity: Quat<F>) {
        *self = Self::with_velocity(value, velocity);
    }

    /// Advance one step and report which branch the step took.
    pub fn advance(
        &mut self,
        target: Quat<F>,
        tracking: Tracking<F>,
        dt: F,
        config: &SpringConfig<F>,
    ) -> StepOutcome {
        // q and -q are the same rotation; chase the copy on our side so the
        // state never swings the long way round through a sign flip.
        let current = Quat::from_vector(self.value, false);
        let target = target.aligned_to(current).to_vector();

        match tracking.resolve(config) {
            Some(osc) => osc.step(&mut self.value, &mut self.velocity, target, dt, config),
            None => {
                tracing::trace!("half-life below epsilon, snapping rotation to target");
                self.value = target;
                self.velocity = Vec4::zero();
                StepOutcome::Snapped
            }
        }
    }

    /// Advance one step with an explicit parameterization and tolerances.
    pub fn track(
        &mut self,
        target: Quat<F>,
        tracking: Tracking<F>,
        dt: F,
        config: &SpringConfig<F>,
    ) -> Quat<F> {
        self.advance(target, tracking, dt, config);
        self.value()
    }

    pub fn track_damping_ratio(
        &mut self,
        target: Quat<F>,
        angular_frequency: F,
        damping_ratio: F,
        dt: F,
    ) -> Quat<F> {
        let tracking = Tracking::DampingRatio { angular_frequency, damping_ratio };
        self.track(target, tracking, dt, &SpringConfig::new())
    }

    pub fn track_half_life(&mut self, target: Quat<F>, frequency_hz: F, half_life: F, dt: F) -> Quat<F> {
        let tracking = Tracking::HalfLife { frequency_hz, half_life };
        self.track(target, tracking, dt, &SpringConfig::new())
    }

    pub fn track_exponential(&mut self, target: Quat<F>, half_life: F, dt: F) -> Quat<F> {
        let tracking = Tracking::Exponential { half_life };
        self.track(target, tracking, dt, &SpringConfig::new())
    }

    /// True when within `eps_angle` radians of `target` and the encoded
    /// velocity is below `eps_vel`.
    pub fn is_settled(&self, target: Quat<F>, eps_angle: F, eps_vel: F) -> bool {
        self.value().angle_to(target) < eps_angle && self.velocity.length() < eps_vel
    }

    pub fn snap_to(&mut self, target: Quat<F>) {
        self.value = target.to_vector();
        self.velocity = Vec4::zero();
    }
}

impl<F: Float> Default for SpringQuat<F> {
    fn default() -> Self {
        Self::new()
    }
}
