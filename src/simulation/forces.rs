//! Force / acceleration contributors for the ensemble
//!
//! Defines the acceleration trait and the direct O(N^2) Newtonian gravity
//! term evaluated each step. Contributors read body positions from the
//! trail head and write into a shared per-body output buffer, so a failed
//! pass leaves the ensemble untouched

use crate::error::SimError;
use super::states::{Ensemble, NVec3};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `ens`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, ens: &Ensemble, out: &mut [NVec3]) -> Result<(), SimError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(ens, out)?;
        }

        Ok(())
    }
}

/// Trait for acceleration sources operating on an [`Ensemble`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, ens: &Ensemble, out: &mut [NVec3]) -> Result<(), SimError>;
}

/// Direct-sum Newtonian gravity with optional softening
///
/// `eps2` is a squared softening length added to every squared separation.
/// With `eps2 = 0` two exactly coincident enabled bodies are a
/// [`SimError::CoincidentBodies`] error; near-coincidence is the caller's
/// responsibility (initial conditions must keep enabled bodies apart)
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, ens: &Ensemble, out: &mut [NVec3]) -> Result<(), SimError> {
        let n = ens.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = ens.body(i);
            if !bi.enabled {
                // inert: neither pulls nor gets pulled
                continue;
            }
            let xi = bi.position();
            let mi = bi.mass;

            for j in (i + 1)..n {
                let bj = ens.body(j);
                if !bj.enabled {
                    continue;
                }
                let xj = bj.position();
                let mj = bj.mass;

                // r is the displacement from i to j: i feels a pull along
                // +r, j feels a pull along -r
                let r = xj - xi;

                // Softened squared separation: d2 = |r|^2 + eps2
                let d2 = r.dot(&r) + self.eps2;
                if d2 == 0.0 {
                    return Err(SimError::CoincidentBodies {
                        a: bi.name.clone(),
                        b: bj.name.clone(),
                    });
                }

                // coef = G / |r_soft|^3
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.g * inv_r3;

                // Newton's law, equal and opposite:
                //   a_i +=  G * m_j * r / |r_soft|^3
                //   a_j += -G * m_i * r / |r_soft|^3
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }

        Ok(())
    }
}
