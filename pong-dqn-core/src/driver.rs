//! Training driver.
use crate::{Agent, AgentBuilder, DriverConfig, Env, EnvAdapter, EnvFactory};
use anyhow::{Context, Result};
use log::{info, warn};

/// Sequences the construction of the agent and the environment, the restoration
/// of the checkpoint and the training run.
///
/// # Training run
///
/// 1. Build the agent for [`DriverConfig::action_count`] actions.
/// 2. Make the environment [`DriverConfig::env_id`] and apply the
///    frame-preprocessing wrapper with [`EnvFactory`].
/// 3. Build an [`EnvAdapter`] over the wrapped environment with
///    [`DriverConfig::env_adapter_config`].
/// 4. Load the agent's weights from [`DriverConfig::checkpoint_path`].
/// 5. Train the agent with [`DriverConfig::train_params`].
///
/// Any error aborts the run and is returned with the failed step as context.
/// In particular, the agent is never trained if its weights could not be loaded.
pub struct TrainingDriver {
    config: DriverConfig,
}

impl TrainingDriver {
    /// Constructs a driver.
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Runs the training and returns the trained agent.
    pub fn run<F, B>(&self, factory: &mut F, builder: &mut B) -> Result<B::Agent>
    where
        F: EnvFactory,
        B: AgentBuilder<EnvAdapter<F::Wrapped>>,
    {
        let config = &self.config;
        config.validate()?;

        info!("Building agent with {} actions", config.action_count);
        let mut agent = builder
            .build(config.action_count)
            .context("failed to build the agent")?;

        info!("Making environment {}", config.env_id);
        let raw = factory
            .make(&config.env_id)
            .with_context(|| format!("failed to make environment {}", config.env_id))?;
        let wrapped = factory
            .wrap(raw)
            .with_context(|| format!("failed to wrap environment {}", config.env_id))?;

        if wrapped.n_actions() != config.action_count {
            warn!(
                "The agent has {} actions, but {} has {}",
                config.action_count,
                config.env_id,
                wrapped.n_actions()
            );
        }

        let adapter_config = config.env_adapter_config();
        info!("Environment adapter: {:?}", adapter_config);
        let mut env = EnvAdapter::build(wrapped, adapter_config)?;

        info!("Loading weights from {:?}", config.checkpoint_path);
        agent
            .load_weights(&config.checkpoint_path)
            .with_context(|| format!("failed to load weights from {:?}", config.checkpoint_path))?;

        let params = config.train_params();
        info!("Training: {:?}", params);
        agent.train(&params, &mut env).context("training failed")?;
        info!("Training finished");

        Ok(agent)
    }
}
