//! Contracts of the collaborators of the driver.
mod agent;
mod env;
mod factory;
mod step;
pub use agent::{Agent, AgentBuilder, TrainParams};
pub use env::Env;
pub use factory::EnvFactory;
pub use step::Step;
