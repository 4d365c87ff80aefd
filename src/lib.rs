//! Damped-spring tracking for per-frame animation.
//!
//! `numspring` advances a `(value, velocity)` pair one step toward a moving
//! target using an implicit closed-form step of the damped harmonic oscillator.
//! The step is stable for any frame time, so springs survive frame spikes and
//! low simulation rates without blowing up.
//!
//! # Features
//!
//! - **Implicit oscillator step**: unconditionally stable, exact snap on settle
//! - **Three parameterizations**: damping ratio, half-life, pure exponential
//! - **Five shapes**: scalar, `Vec2`, `Vec3`, `Vec4`, and rotations (`SpringQuat`)
//! - **Seeded vector noise**: fill 1D/2D/3D grids with uniform random vectors
//! - **`no_std` compatible**: no allocation, `libm` for the math
//!
//! # Example
//! ```
//! use numspring::{Spring1D, Scalar};
//!
//! let mut spring: Spring1D<f32> = Spring1D::at(Scalar(0.0));
//! for _ in 0..120 {
//!     spring.track_half_life(Scalar(10.0), 2.0, 0.1, 1.0 / 60.0);
//! }
//! assert!((spring.value().0 - 10.0).abs() < 0.01);
//! ```

#![no_std]

pub mod float;
pub mod vec;
pub mod oscillator;
pub mod tracking;
pub mod quat;
pub mod spring;
pub mod noise;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Scalar, Vec2, Vec3, Vec4};
pub use oscillator::{Oscillator, StepOutcome};
pub use tracking::Tracking;
pub use quat::Quat;
pub use spring::{SpringState, SpringQuat, Spring1D, Spring2D, Spring3D, Spring4D};
pub use noise::{generate_random_vectors, RandomVector, Shape};
pub use config::SpringConfig;
pub use error::SpringError;
