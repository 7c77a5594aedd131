//! Environment.
use super::Step;
use anyhow::Result;
use std::fmt::Debug;

/// Represents an environment with a discrete action space.
///
/// Both the preprocessed environment produced by an
/// [`EnvFactory`](super::EnvFactory) and the [`EnvAdapter`](crate::EnvAdapter)
/// built over it implement this trait.
pub trait Env {
    /// Observation of the environment.
    type Obs: Clone + Debug;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performes an environment step with the action of index `act`.
    fn step(&mut self, act: usize) -> Result<Step<Self::Obs>>;

    /// Returns the number of discrete actions.
    fn n_actions(&self) -> usize;

    /// Returns the number of remaining lives, if the game has a notion of lives.
    fn lives(&self) -> Option<u32> {
        None
    }
}
