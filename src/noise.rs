//! Seeded random vector noise over 1D, 2D and 3D grids.
//!
//! Fills a caller-provided buffer in row-major order (x fastest) with vectors
//! whose components are uniformly distributed in `[-1, 1)`. The same seed and
//! shape always produce the same output.

use crate::error::SpringError;
use crate::float::Float;
use crate::vec::{Vec2, Vec3};

/// Grid extents of a noise buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    D1(usize),
    D2(usize, usize),
    D3(usize, usize, usize),
}

impl Shape {
    /// Number of cells in the grid, or `None` if it does not fit in `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        match *self {
            Shape::D1(x) => Some(x),
            Shape::D2(x, y) => x.checked_mul(y),
            Shape::D3(x, y, z) => x.checked_mul(y)?.checked_mul(z),
        }
    }

    /// True if any extent is zero.
    pub fn has_zero_extent(&self) -> bool {
        match *self {
            Shape::D1(x) => x == 0,
            Shape::D2(x, y) => x == 0 || y == 0,
            Shape::D3(x, y, z) => x == 0 || y == 0 || z == 0,
        }
    }
}

/// PCG-XSL-RR 128/64 generator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pcg64 {
    state: u128,
}

impl Pcg64 {
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        let _ = rng.next_u64();
        rng.state = rng.state.wrapping_add(seed as u128);
        let _ = rng.next_u64();
        rng
    }

    /// Uniformly distributed in `0..2^64`.
    #[inline]
    #[must_use]
    pub fn next_u64(&mut self) -> u64 {
        let old_state = self.state;
        self.state = old_state
            .wrapping_mul(25492979953554139244865540595714422341)
            .wrapping_add(63641362238467930051442695040888963407);
        ((old_state >> 64) ^ old_state).rotate_right((old_state >> 122) as u32) as u64
    }

    /// Uniformly distributed in `-1.0..1.0`, 24 bits of precision.
    #[inline]
    #[must_use]
    pub fn next_f32_s(&mut self) -> f32 {
        let value = (self.next_u64() as i64 >> (64 - 25)) as f32;
        value * 5.960_464_5e-8 // 0x1p-24
    }
}

/// Vector types the noise generator can produce.
pub trait RandomVector: Copy {
    fn random(rng: &mut Pcg64) -> Self;
}

impl<F: Float> RandomVector for Vec2<F> {
    fn random(rng: &mut Pcg64) -> Self {
        let x = F::from_f32(rng.next_f32_s());
        let y = F::from_f32(rng.next_f32_s());
        Vec2::new(x, y)
    }
}

impl<F: Float> RandomVector for Vec3<F> {
    fn random(rng: &mut Pcg64) -> Self {
        let x = F::from_f32(rng.next_f32_s());
        let y = F::from_f32(rng.next_f32_s());
        let z = F::from_f32(rng.next_f32_s());
        Vec3::new(x, y, z)
    }
}

/// Fill `output` with random vectors for a grid of the given `shape`.
///
/// `output.len()` must equal the shape's cell count and every extent must be
/// non-zero.
pub fn generate_random_vectors<V: RandomVector>(
    output: &mut [V],
    seed: u64,
    shape: Shape,
) -> Result<(), SpringError> {
    if shape.has_zero_extent() {
        tracing::debug!(?shape, "rejecting empty noise shape");
        return Err(SpringError::EmptyShape);
    }
    let Some(expected) = shape.cell_count() else {
        tracing::debug!(?shape, "noise shape overflows usize");
        return Err(SpringError::ShapeOverflow);
    };
    if expected != output.len() {
        tracing::debug!(?shape, len = output.len(), "noise buffer does not match shape");
        return Err(SpringError::ShapeMismatch { expected, actual: output.len() });
    }

    let mut rng = Pcg64::with_seed(seed);
    for cell in output.iter_mut() {
        *cell = V::random(&mut rng);
    }
    Ok(())
}
