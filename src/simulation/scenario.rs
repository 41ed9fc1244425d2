//! Build a runnable simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! a populated `Ensemble` and the active force set. All validation of
//! scenario input happens here; the core registry operations stay
//! infallible

use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;
use super::forces::{AccelSet, NewtonianGravity};
use super::integrator::euler_step;
use super::params::Parameters;
use super::states::{Ensemble, NVec3};

/// A fully-initialized simulation: the ensemble at t = 0 plus the set of
/// active force laws. The harness constructs one of these and drives it
/// with [`Scenario::step`]
#[derive(Debug)]
pub struct Scenario {
    pub ensemble: Ensemble,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p = &cfg.parameters;

        if p.trail == 0 {
            return Err(SimError::InvalidParameter(
                "trail capacity must be at least 1".into(),
            ));
        }
        if !p.dt.is_finite() || p.dt <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "dt must be finite and positive, got {}",
                p.dt
            )));
        }
        if !p.g.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "g must be finite, got {}",
                p.g
            )));
        }
        if !p.eps2.is_finite() || p.eps2 < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "eps2 must be finite and non-negative, got {}",
                p.eps2
            )));
        }

        let parameters = Parameters {
            g: p.g,
            dt: p.dt,
            eps2: p.eps2,
            trail: p.trail,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` via the registry,
        // rejecting input the core would silently accept
        let mut ensemble = Ensemble::new(parameters.clone());
        for bc in &cfg.bodies {
            if !bc.mass.is_finite() || bc.mass < 0.0 {
                return Err(SimError::InvalidParameter(format!(
                    "body `{}`: mass must be finite and non-negative, got {}",
                    bc.name, bc.mass
                )));
            }
            if ensemble.find_body(&bc.name).is_some() {
                return Err(SimError::DuplicateName(bc.name.clone()));
            }

            ensemble.add_body(
                bc.name.as_str(),
                bc.enabled,
                bc.mass,
                NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
            );
        }

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            eps2: parameters.eps2,
        });

        Ok(Self { ensemble, forces })
    }

    /// Advance the scenario by one step
    pub fn step(&mut self) -> Result<(), SimError> {
        euler_step(&mut self.ensemble, &self.forces)
    }
}
