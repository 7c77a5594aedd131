//! Agent.
use super::Env;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Budget and hyperparameters of a training run.
///
/// The fields are given to [`Agent::train`] in the positional order of the
/// training call: episodes, batch size, (environment), the two large bounds and
/// the exploration floor.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainParams {
    /// The number of episodes (or iterations) of the run.
    pub episode_budget: usize,

    /// The number of transitions in a minibatch.
    pub batch_size: usize,

    /// First large bound, the capacity of the replay buffer.
    ///
    /// How it is used is up to the agent.
    pub buffer_capacity: usize,

    /// Second large bound, the total number of environment steps.
    ///
    /// How it is used is up to the agent.
    pub step_budget: usize,

    /// Minimum probability of taking a non-greedy action.
    pub exploration_floor: f64,
}

/// Represents a trainable policy on an environment.
pub trait Agent<E: Env> {
    /// Loads the parameters of the agent from the given checkpoint.
    fn load_weights(&mut self, path: &Path) -> Result<()>;

    /// Runs a training loop on `env` bounded by `params`.
    fn train(&mut self, params: &TrainParams, env: &mut E) -> Result<()>;
}

/// Constructs an [`Agent`] for a given number of discrete actions.
pub trait AgentBuilder<E: Env> {
    /// The agent built by this builder.
    type Agent: Agent<E>;

    /// Builds an agent choosing among `action_count` actions.
    fn build(&mut self, action_count: usize) -> Result<Self::Agent>;
}
