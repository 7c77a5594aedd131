use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Show or check the configuration of the Pong DQN training driver
#[derive(Clone, Parser, Debug, Serialize, Deserialize)]
#[command(version, about)]
pub struct Args {
    /// "show_config" or "check".
    /// In check mode, the configuration is validated and the checkpoint is opened.
    #[arg(long, default_value = "show_config")]
    pub mode: String,

    /// YAML file of the driver configuration.
    /// If not given, the default configuration is used.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Checkpoint from which the agent's weights are restored.
    /// Overrides the value in the configuration.
    #[arg(long)]
    pub checkpoint: Option<PathBuf>,
}
