//! Core state types for the N-body simulation
//!
//! Defines the `Body` record (name, enabled flag, mass, velocity, position
//! trail) and the `Ensemble` owning the ordered body list, the simulation
//! constants and the elapsed time `t`
//!
//! Bodies are addressed by insertion index; name lookup is a first-match
//! convenience over the insertion order

use std::fmt;

use log::debug;
use nalgebra::Vector3;

use crate::error::SimError;
use super::forces::{AccelSet, NewtonianGravity};
use super::integrator::euler_step;
use super::params::Parameters;
use super::trail::Trail;

pub type NVec3 = Vector3<f64>;

/// A named point mass.
///
/// Disabled bodies exert no force, receive no updates and keep their trail
/// frozen; they stay at their last known position.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub enabled: bool,
    pub mass: f64, // non-negative, caller-checked
    pub vel: NVec3,
    pub trail: Trail,
}

impl Body {
    /// Current position: the newest trail entry.
    pub fn position(&self) -> NVec3 {
        self.trail.latest()
    }
}

/// The complete collection of bodies plus simulation constants, advanced
/// together one fixed step at a time.
#[derive(Debug, Clone)]
pub struct Ensemble {
    bodies: Vec<Body>,
    params: Parameters,
    t: f64, // elapsed simulation time
}

impl Ensemble {
    pub fn new(params: Parameters) -> Self {
        Self {
            bodies: Vec::new(),
            params,
            t: 0.0,
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Body at `index`. `index` must be in `[0, len)`.
    pub fn body(&self, index: usize) -> &Body {
        &self.bodies[index]
    }

    /// Name of the body at `index`. `index` must be in `[0, len)`.
    pub fn body_name(&self, index: usize) -> &str {
        &self.bodies[index].name
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(super) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub(super) fn advance_clock(&mut self) {
        self.t += self.params.dt;
    }

    /// Index of the first body named `name`, in insertion order.
    ///
    /// Duplicate names are permitted; the first match wins.
    pub fn find_body(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    /// Append a new body and return its index.
    ///
    /// The trail is seeded with the single entry `pos`. Neither the name
    /// nor the mass sign is validated here; scenario input goes through
    /// the configuration layer, which is.
    pub fn add_body(
        &mut self,
        name: impl Into<String>,
        enabled: bool,
        mass: f64,
        pos: NVec3,
        vel: NVec3,
    ) -> usize {
        self.bodies.push(Body {
            name: name.into(),
            enabled,
            mass,
            vel,
            trail: Trail::new(self.params.trail, pos),
        });

        self.bodies.len() - 1
    }

    /// Create the body if no body has this name, otherwise overwrite the
    /// first match in place. Returns the affected index.
    ///
    /// Overwriting replaces the enabled flag, mass and velocity and resets
    /// the trail to the single entry `pos`; the prior history is discarded.
    pub fn upsert_body(
        &mut self,
        name: impl Into<String>,
        enabled: bool,
        mass: f64,
        pos: NVec3,
        vel: NVec3,
    ) -> usize {
        let name = name.into();

        match self.find_body(&name) {
            None => self.add_body(name, enabled, mass, pos, vel),
            Some(index) => {
                let body = &mut self.bodies[index];
                body.enabled = enabled;
                body.mass = mass;
                body.vel = vel;
                body.trail.reset(pos);

                index
            }
        }
    }

    /// Overwrite the mass of the first body named `name`.
    pub fn set_body_mass(&mut self, name: &str, mass: f64) -> Result<(), SimError> {
        let index = self
            .find_body(name)
            .ok_or_else(|| SimError::BodyNotFound(name.to_string()))?;
        self.bodies[index].mass = mass;

        Ok(())
    }

    /// Advance the ensemble by one step under its own gravity.
    ///
    /// Equivalent to [`euler_step`] with a force set holding a single
    /// [`NewtonianGravity`] term built from the ensemble parameters.
    pub fn step(&mut self) -> Result<(), SimError> {
        let forces = AccelSet::new().with(NewtonianGravity {
            g: self.params.g,
            eps2: self.params.eps2,
        });

        euler_step(self, &forces)
    }

    /// Log one line per body at debug level.
    pub fn dump_bodies(&self) {
        for (i, b) in self.bodies.iter().enumerate() {
            let p = b.position();
            debug!(
                "[{}] {} enabled={} mass={} pos=({}, {}, {}) vel=({}, {}, {})",
                i, b.name, b.enabled, b.mass, p.x, p.y, p.z, b.vel.x, b.vel.y, b.vel.z
            );
        }
    }
}

/// Full positions report: per body, a state line followed by the retained
/// trail, oldest entry first.
impl fmt::Display for Ensemble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bodies {
            writeln!(f, "{} (enabled={}, mass={})", b.name, b.enabled, b.mass)?;
            writeln!(f, "  vel: ({:.6}, {:.6}, {:.6})", b.vel.x, b.vel.y, b.vel.z)?;
            for p in b.trail.iter() {
                writeln!(f, "  ({:.6}, {:.6}, {:.6})", p.x, p.y, p.z)?;
            }
        }

        Ok(())
    }
}
