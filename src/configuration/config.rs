//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – simulation constants (g, dt, softening, trail capacity)
//! - [`BodyConfig`]       – one body's name, flags and initial state
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 1.0            # gravitational constant
//!   dt: 1.0           # fixed step size
//!   eps2: 0.0         # softening epsilon^2, 0 disables
//!   trail: 100        # positions retained per body
//!
//! bodies:
//!   - name: alpha
//!     mass: 1.0
//!     x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!   - name: beta
//!     enabled: false
//!     mass: 2.0
//!     x: [ 1.0, 0.0, 0.0 ]
//!     v: [ 0.0, 1.0, 0.0 ]
//! ```
//!
//! Every parameter has a default (vacuum gravitational constant, unit step,
//! no softening, 100-entry trails) and `enabled` defaults to true, so a
//! minimal scenario is just a list of named masses with positions.
//!
//! Validation happens when the configuration is turned into a runtime
//! scenario, not here.

use serde::Deserialize;

fn default_g() -> f64 {
    6.6743e-11
}

fn default_dt() -> f64 {
    1.0
}

fn default_trail() -> usize {
    100
}

fn default_enabled() -> bool {
    true
}

/// Simulation constants for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_dt")]
    pub dt: f64, // fixed step size
    #[serde(default)]
    pub eps2: f64, // softening, 0 disables
    #[serde(default = "default_trail")]
    pub trail: usize, // positions retained per body
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: default_g(),
            dt: default_dt(),
            eps2: 0.0,
            trail: default_trail(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // unique within a scenario
    #[serde(default = "default_enabled")]
    pub enabled: bool, // disabled bodies are inert markers
    pub mass: f64,     // non-negative
    pub x: [f64; 3],   // initial position
    pub v: [f64; 3],   // initial velocity
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // simulation constants
    pub bodies: Vec<BodyConfig>, // initial state of the system
}
