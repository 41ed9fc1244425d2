pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, Ensemble, NVec3};
pub use simulation::params::Parameters;
pub use simulation::trail::Trail;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step;

pub use error::SimError;
