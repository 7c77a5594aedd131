//! Environment adapter applying the usual Atari normalizations.
mod config;
use crate::{error::DriverError, Env, Step};
use anyhow::Result;
pub use config::EnvAdapterConfig;
use log::debug;

/// Index of the no-op action.
const NOOP_ACTION: usize = 0;

/// Maximum number of no-op actions taken after a reset.
const NOOP_MAX: u32 = 30;

/// Adapter over a preprocessed environment.
///
/// * Action repeat: an action is applied a number of times drawn uniformly from
///   [`EnvAdapterConfig::action_repeat`], stopping at the end of an episode.
///   The rewards of the repeats are summed.
/// * Reward clipping: every reward, and the summed reward, is clamped to
///   `[reward_clip_min, reward_clip_max]`.
/// * Episodic life: losing a life terminates the episode while the game goes on.
///   The next [`Env::reset`] takes a single no-op step instead of resetting the
///   game.
/// * No-op reset: after resetting the game, `1..=30` no-op actions are taken.
pub struct EnvAdapter<E: Env> {
    env: E,
    config: EnvAdapterConfig,
    rng: fastrand::Rng,

    // Lives after the latest step.
    lives: Option<u32>,

    // If the game itself was over at the latest step.
    was_real_done: bool,
}

impl<E: Env> EnvAdapter<E> {
    /// Builds an adapter over `env`.
    pub fn build(env: E, config: EnvAdapterConfig) -> Result<Self> {
        config.validate()?;
        let lives = env.lives();

        Ok(Self {
            env,
            config,
            rng: fastrand::Rng::new(),
            lives,
            was_real_done: true,
        })
    }

    /// Sets the seed of the random number generator used for action repeats and
    /// no-op resets.
    pub fn with_seed(self, seed: u64) -> Self {
        self.rng.seed(seed);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EnvAdapterConfig {
        &self.config
    }

    /// Returns the adapted environment.
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Consumes the adapter and returns the adapted environment.
    pub fn into_inner(self) -> E {
        self.env
    }

    fn clip_reward(&self, r: f32) -> f32 {
        r.max(self.config.reward_clip_min)
            .min(self.config.reward_clip_max)
    }

    fn n_repeats(&mut self) -> u32 {
        let [lo, hi] = self.config.action_repeat;
        self.rng.u32(lo..=hi)
    }

    fn episodic_life_step(&mut self, act: usize) -> Result<Step<E::Obs>> {
        let mut step = self.env.step(act)?;
        self.was_real_done = step.is_done();

        if self.config.episodic_life {
            let lives = self.env.lives();
            if let (Some(lives), Some(prev)) = (lives, self.lives) {
                if lives < prev && lives > 0 {
                    debug!("Life lost, {} remaining", lives);
                    step.is_terminated = true;
                }
            }
            self.lives = lives;
        }

        Ok(step)
    }

    fn noop_steps(&mut self, mut obs: E::Obs) -> Result<E::Obs> {
        let n = self.rng.u32(1..=NOOP_MAX);
        debug!("Taking {} no-op steps after reset", n);

        for _ in 0..n {
            let step = self.env.step(NOOP_ACTION)?;
            obs = if step.is_done() {
                self.env.reset()?
            } else {
                step.obs
            };
        }

        Ok(obs)
    }

    fn real_reset(&mut self) -> Result<E::Obs> {
        let obs = self.env.reset()?;
        if self.config.noop_reset {
            self.noop_steps(obs)
        } else {
            Ok(obs)
        }
    }
}

impl<E: Env> Env for EnvAdapter<E> {
    type Obs = E::Obs;

    fn reset(&mut self) -> Result<Self::Obs> {
        let obs = if !self.config.episodic_life || self.was_real_done {
            self.real_reset()?
        } else {
            // no-op step to advance from the lost life state
            let step = self.env.step(NOOP_ACTION)?;
            if step.is_done() {
                self.real_reset()?
            } else {
                step.obs
            }
        };

        self.was_real_done = false;
        self.lives = self.env.lives();

        Ok(obs)
    }

    fn step(&mut self, act: usize) -> Result<Step<Self::Obs>> {
        let n_actions = self.env.n_actions();
        if act >= n_actions {
            return Err(DriverError::InvalidAction { act, n_actions }.into());
        }

        let n = self.n_repeats();
        let mut step = self.episodic_life_step(act)?;
        let mut reward = self.clip_reward(step.reward);

        for _ in 1..n {
            if step.is_done() {
                break;
            }
            step = self.episodic_life_step(act)?;
            reward += self.clip_reward(step.reward);
        }

        step.reward = self.clip_reward(reward);
        Ok(step)
    }

    fn n_actions(&self) -> usize {
        self.env.n_actions()
    }

    fn lives(&self) -> Option<u32> {
        self.env.lives()
    }
}
