//! Configuration of [`EnvAdapter`](super::EnvAdapter).
use crate::error::DriverError;
use serde::{Deserialize, Serialize};

/// Configuration of [`EnvAdapter`](super::EnvAdapter).
///
/// The fields follow the argument order of the adapter constructor:
/// episodic life, no-op reset, action repeat range, reserved flag and the two
/// reward clipping bounds.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EnvAdapterConfig {
    /// If `true`, losing a life ends the episode seen by the agent.
    pub episodic_life: bool,

    /// If `true`, a random number of no-op actions is taken after a reset.
    pub noop_reset: bool,

    /// Inclusive range from which the number of repeats of an action is drawn.
    pub action_repeat: [u32; 2],

    /// Carried along with the configuration, not interpreted by the adapter.
    pub reserved_flag: bool,

    /// Lower bound of rewards.
    pub reward_clip_min: f32,

    /// Upper bound of rewards.
    pub reward_clip_max: f32,
}

impl Default for EnvAdapterConfig {
    fn default() -> Self {
        Self {
            episodic_life: false,
            noop_reset: false,
            action_repeat: [2, 3],
            reserved_flag: false,
            reward_clip_min: -1.0,
            reward_clip_max: 1.0,
        }
    }
}

impl EnvAdapterConfig {
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
        self.reward_clip_min = min;
        self.reward_clip_max = max;
        self
    }

    /// Checks the action repeat range and the reward clipping bounds.
    pub fn validate(&self) -> Result<(), DriverError> {
        let [lo, hi] = self.action_repeat;
        if lo == 0 || lo > hi {
            return Err(DriverError::InvalidConfig(format!(
                "action repeat range [{}, {}] must satisfy 1 <= lo <= hi",
                lo, hi
            )));
        }

        let (min, max) = (self.reward_clip_min, self.reward_clip_max);
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(DriverError::InvalidConfig(format!(
                "reward clipping bounds ({}, {}) must be finite with min <= max",
                min, max
            )));
        }

        Ok(())
    }
}
