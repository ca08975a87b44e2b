//! Validated parameters for the G(n, p) generator.
//!
//! Bad input is rejected here, before any random draws are made, so callers
//! see a typed error instead of a degenerate graph.

use rand::{SeedableRng, rngs::SmallRng};

use crate::error::{GeneratorError, Result};

/// Parameters describing one G(n, p) instance.
///
/// # Examples
/// ```
/// use gnpgen_core::GnpParams;
///
/// let params = GnpParams::new(10, 0.5, -3).expect("parameters are valid");
/// assert_eq!(params.vertex_count(), 10);
/// assert_eq!(params.candidate_pairs(), 45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GnpParams {
    vertex_count: usize,
    probability: f64,
    seed: i64,
}

impl GnpParams {
    /// Validates and stores the generator parameters.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidProbability`] when `probability` is
    /// `NaN`, infinite, or outside `[0, 1]`.
    pub fn new(vertex_count: usize, probability: f64, seed: i64) -> Result<Self> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(GeneratorError::InvalidProbability { got: probability });
        }
        Ok(Self {
            vertex_count,
            probability,
            seed,
        })
    }

    /// Number of vertices `n`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edge inclusion probability `p`.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Seed as supplied by the caller.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// Number of unordered vertex pairs, C(n, 2), saturating at `usize::MAX`.
    #[must_use]
    pub const fn candidate_pairs(&self) -> usize {
        let n = self.vertex_count;
        if n % 2 == 0 {
            (n / 2).saturating_mul(n.saturating_sub(1))
        } else {
            n.saturating_mul((n - 1) / 2)
        }
    }

    /// Builds the PRNG for this instance.
    ///
    /// The signed seed is reinterpreted bit-for-bit, so `-1` and
    /// `u64::MAX` select the same stream.
    #[must_use]
    pub fn rng(&self) -> SmallRng {
        SmallRng::seed_from_u64(self.seed.cast_unsigned())
    }
}
