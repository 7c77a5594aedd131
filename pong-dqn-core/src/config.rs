//! Configuration of [`TrainingDriver`](crate::TrainingDriver).
use crate::{error::DriverError, EnvAdapterConfig, TrainParams};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

/// Configuration of [`TrainingDriver`](crate::TrainingDriver).
///
/// The default values are the ones of the Pong experiment. Fields missing in a
/// YAML file take their default values.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct DriverConfig {
    /// The number of discrete actions of the agent.
    pub action_count: usize,

    /// Name of the environment.
    pub env_id: String,

    /// Episodic life flag of the environment adapter.
    pub episodic_life: bool,

    /// No-op reset flag of the environment adapter.
    pub noop_reset: bool,

    /// Inclusive range of action repeats.
    pub action_repeat: [u32; 2],

    /// Reserved flag of the environment adapter.
    pub reserved_flag: bool,

    /// Reward clipping bounds `[min, max]`.
    pub reward_clip: [f32; 2],

    /// Checkpoint from which the agent's weights are restored.
    pub checkpoint_path: PathBuf,

    /// The number of training episodes.
    pub episode_budget: usize,

    /// Minibatch size.
    pub batch_size: usize,

    /// Capacity of the replay buffer.
    pub buffer_capacity: usize,

    /// The number of environment steps.
    pub step_budget: usize,

    /// Minimum exploration probability.
    pub exploration_floor: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            action_count: 2,
            env_id: "PongDeterministic-v4".to_string(),
            episodic_life: false,
            noop_reset: false,
            action_repeat: [2, 3],
            reserved_flag: false,
            reward_clip: [-1.0, 1.0],
            checkpoint_path: PathBuf::from("./zwischenstand_model.torch"),
            episode_budget: 100,
            batch_size: 32,
            buffer_capacity: 1_000_000,
            step_budget: 1_000_000,
            exploration_floor: 0.1,
        }
    }
}

impl DriverConfig {
    /// Sets the number of actions.
    pub fn action_count(mut self, v: usize) -> Self {
        self.action_count = v;
        self
    }

    /// Sets the name of the environment.
    pub fn env_id(mut self, v: impl Into<String>) -> Self {
        self.env_id = v.into();
        self
    }

    /// Sets the episodic life flag.
    pub fn episodic_life(mut self, v: bool) -> Self {
        self.episodic_life = v;
        self
    }

    /// Sets the no-op reset flag.
    pub fn noop_reset(mut self, v: bool) -> Self {
        self.noop_reset = v;
        self
    }

    /// Sets the inclusive range of action repeats.
    pub fn action_repeat(mut self, lo: u32, hi: u32) -> Self {
        self.action_repeat = [lo, hi];
        self
    }

    /// Sets the reserved flag.
    pub fn reserved_flag(mut self, v: bool) -> Self {
        self.reserved_flag = v;
        self
    }

    /// Sets the reward clipping bounds.
    pub fn reward_clip(mut self, min: f32, max: f32) -> Self {
        self.reward_clip = [min, max];
        self
    }

    /// Sets the checkpoint path.
    pub fn checkpoint_path(mut self, v: impl Into<PathBuf>) -> Self {
        self.checkpoint_path = v.into();
        self
    }

    /// Sets the number of training episodes.
    pub fn episode_budget(mut self, v: usize) -> Self {
        self.episode_budget = v;
        self
    }

    /// Sets the minibatch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the capacity of the replay buffer.
    pub fn buffer_capacity(mut self, v: usize) -> Self {
        self.buffer_capacity = v;
        self
    }

    /// Sets the number of environment steps.
    pub fn step_budget(mut self, v: usize) -> Self {
        self.step_budget = v;
        self
    }

    /// Sets the minimum exploration probability.
    pub fn exploration_floor(mut self, v: f64) -> Self {
        self.exploration_floor = v;
        self
    }

    /// Returns the configuration of the environment adapter.
    pub fn env_adapter_config(&self) -> EnvAdapterConfig {
        EnvAdapterConfig {
            episodic_life: self.episodic_life,
            noop_reset: self.noop_reset,
            action_repeat: self.action_repeat,
            reserved_flag: self.reserved_flag,
            reward_clip_min: self.reward_clip[0],
            reward_clip_max: self.reward_clip[1],
        }
    }

    /// Returns the parameters of the training call.
    pub fn train_params(&self) -> TrainParams {
        TrainParams {
            episode_budget: self.episode_budget,
            batch_size: self.batch_size,
            buffer_capacity: self.buffer_capacity,
            step_budget: self.step_budget,
            exploration_floor: self.exploration_floor,
        }
    }

    /// Checks the constraints on the values.
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.action_count == 0 {
            return Err(DriverError::InvalidConfig(
                "action_count must be positive".to_string(),
            ));
        }
        if self.env_id.is_empty() {
            return Err(DriverError::InvalidConfig(
                "env_id must not be empty".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(DriverError::InvalidConfig(
                "batch_size must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.exploration_floor) {
            return Err(DriverError::InvalidConfig(format!(
                "exploration_floor {} is not a probability",
                self.exploration_floor
            )));
        }
        self.env_adapter_config().validate()
    }

    /// Constructs [`DriverConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`DriverConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
