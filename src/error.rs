//! Error taxonomy for the simulation core and the configuration layer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Name-based mutation addressed a body that does not exist.
    #[error("no body named `{0}`")]
    BodyNotFound(String),

    /// Two enabled bodies occupy exactly the same position with no
    /// softening; the step is aborted with no state mutated.
    #[error("bodies `{a}` and `{b}` occupy the same position")]
    CoincidentBodies { a: String, b: String },

    /// Scenario configuration names the same body twice.
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    /// Scenario configuration fails validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
