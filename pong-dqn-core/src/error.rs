//! Errors in the library.
use thiserror::Error;

/// Errors raised by the driver and the environment adapter.
///
/// Errors of the collaborators are not translated; they travel as
/// [`anyhow::Error`] with the driver phase attached as context.
#[derive(Error, Debug, PartialEq)]
pub enum DriverError {
    /// The driver configuration violates a constraint.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An action outside of the action space was given to the environment.
    #[error("Invalid action {act}, the environment has {n_actions} actions")]
    InvalidAction {
        /// The rejected action.
        act: usize,

        /// The number of actions of the environment.
        n_actions: usize,
    },
}
