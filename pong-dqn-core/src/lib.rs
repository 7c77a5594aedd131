#![warn(missing_docs)]
//! Core of the Pong DQN training driver.
//!
//! The crate does not implement a learning algorithm or an emulator. It defines
//! the contracts the driver needs from its collaborators, an environment adapter
//! applying the usual Atari normalizations, and the driver itself:
//!
//! * [`AgentBuilder`] and [`Agent`] - constructs an agent for a number of actions,
//!   restores its weights and runs the training loop.
//! * [`EnvFactory`] - creates a raw environment by name and applies the
//!   frame-preprocessing wrapper.
//! * [`EnvAdapter`] - episodic life, action repeat, no-op reset and reward clipping
//!   over any [`Env`].
//! * [`TrainingDriver`] - sequences the calls above with a [`DriverConfig`].
//!
//! ```no_run
//! # use anyhow::Result;
//! # use pong_dqn_core::{AgentBuilder, DriverConfig, EnvFactory, TrainingDriver};
//! # fn run<F, B>(factory: &mut F, builder: &mut B) -> Result<()>
//! # where
//! #     F: EnvFactory,
//! #     B: AgentBuilder<pong_dqn_core::EnvAdapter<F::Wrapped>>,
//! # {
//! let config = DriverConfig::default();
//! TrainingDriver::new(config).run(factory, builder)?;
//! # Ok(())
//! # }
//! ```
pub mod adapter;
pub mod config;
pub mod error;

mod base;
pub use base::{Agent, AgentBuilder, Env, EnvFactory, Step, TrainParams};

pub use adapter::{EnvAdapter, EnvAdapterConfig};
pub use config::DriverConfig;

mod driver;
pub use driver::TrainingDriver;
