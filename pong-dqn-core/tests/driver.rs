use anyhow::{anyhow, Result};
use pong_dqn_core::{
    error::DriverError, Agent, AgentBuilder, DriverConfig, Env, EnvAdapter, EnvAdapterConfig,
    EnvFactory, Step, TrainParams, TrainingDriver,
};
use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
};
use test_log::test;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    BuildAgent(usize),
    Make(String),
    Wrap(String),
    LoadWeights(PathBuf),
    Train(TrainParams, EnvAdapterConfig, String),
}

type CallLog = Rc<RefCell<Vec<Call>>>;

struct RawEnv(String);

struct WrappedEnv {
    id: String,
    n_actions: usize,
}

impl Env for WrappedEnv {
    type Obs = ();

    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    fn step(&mut self, act: usize) -> Result<Step<()>> {
        Ok(Step::new((), act, 0.0, true, false))
    }

    fn n_actions(&self) -> usize {
        self.n_actions
    }
}

struct MockFactory {
    calls: CallLog,
    n_actions: usize,
    fail_make: bool,
}

impl EnvFactory for MockFactory {
    type Raw = RawEnv;
    type Wrapped = WrappedEnv;

    fn make(&mut self, id: &str) -> Result<RawEnv> {
        self.calls.borrow_mut().push(Call::Make(id.to_string()));
        if self.fail_make {
            return Err(anyhow!("unknown environment {}", id));
        }
        Ok(RawEnv(id.to_string()))
    }

    fn wrap(&mut self, raw: RawEnv) -> Result<WrappedEnv> {
        self.calls.borrow_mut().push(Call::Wrap(raw.0.clone()));
        Ok(WrappedEnv {
            id: raw.0,
            n_actions: self.n_actions,
        })
    }
}

struct MockAgent {
    calls: CallLog,
    weights_exist: bool,
}

impl Agent<EnvAdapter<WrappedEnv>> for MockAgent {
    fn load_weights(&mut self, path: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::LoadWeights(path.to_path_buf()));
        if self.weights_exist {
            Ok(())
        } else {
            Err(anyhow!("no such file: {:?}", path))
        }
    }

    fn train(&mut self, params: &TrainParams, env: &mut EnvAdapter<WrappedEnv>) -> Result<()> {
        env.reset()?;
        self.calls.borrow_mut().push(Call::Train(
            params.clone(),
            env.config().clone(),
            env.inner().id.clone(),
        ));
        Ok(())
    }
}

struct MockAgentBuilder {
    calls: CallLog,
    weights_exist: bool,
}

impl AgentBuilder<EnvAdapter<WrappedEnv>> for MockAgentBuilder {
    type Agent = MockAgent;

    fn build(&mut self, action_count: usize) -> Result<MockAgent> {
        self.calls
            .borrow_mut()
            .push(Call::BuildAgent(action_count));
        Ok(MockAgent {
            calls: self.calls.clone(),
            weights_exist: self.weights_exist,
        })
    }
}

fn mocks(weights_exist: bool) -> (CallLog, MockFactory, MockAgentBuilder) {
    let calls = CallLog::default();
    let factory = MockFactory {
        calls: calls.clone(),
        n_actions: 2,
        fail_make: false,
    };
    let builder = MockAgentBuilder {
        calls: calls.clone(),
        weights_exist,
    };
    (calls, factory, builder)
}

fn expected_adapter_config() -> EnvAdapterConfig {
    EnvAdapterConfig {
        episodic_life: false,
        noop_reset: false,
        action_repeat: [2, 3],
        reserved_flag: false,
        reward_clip_min: -1.0,
        reward_clip_max: 1.0,
    }
}

#[test]
fn test_calls_in_order() -> Result<()> {
    let (calls, mut factory, mut builder) = mocks(true);
    TrainingDriver::new(DriverConfig::default()).run(&mut factory, &mut builder)?;

    let id = "PongDeterministic-v4".to_string();
    let params = TrainParams {
        episode_budget: 100,
        batch_size: 32,
        buffer_capacity: 1_000_000,
        step_budget: 1_000_000,
        exploration_floor: 0.1,
    };
    assert_eq!(
        *calls.borrow(),
        vec![
            Call::BuildAgent(2),
            Call::Make(id.clone()),
            Call::Wrap(id.clone()),
            Call::LoadWeights(PathBuf::from("./zwischenstand_model.torch")),
            Call::Train(params, expected_adapter_config(), id),
        ]
    );
    Ok(())
}

#[test]
fn test_agent_built_once() -> Result<()> {
    let (calls, mut factory, mut builder) = mocks(true);
    TrainingDriver::new(DriverConfig::default()).run(&mut factory, &mut builder)?;

    let n = calls
        .borrow()
        .iter()
        .filter(|c| matches!(c, Call::BuildAgent(_)))
        .count();
    assert_eq!(n, 1);
    Ok(())
}

#[test]
fn test_no_training_when_weights_fail_to_load() {
    let (calls, mut factory, mut builder) = mocks(false);
    let err = TrainingDriver::new(DriverConfig::default())
        .run(&mut factory, &mut builder)
        .err()
        .expect("loading weights must fail");

    assert!(format!("{:#}", err).contains("zwischenstand_model.torch"));
    assert!(matches!(calls.borrow().last(), Some(Call::LoadWeights(_))));
    assert!(!calls.borrow().iter().any(|c| matches!(c, Call::Train(..))));
}

#[test]
fn test_make_failure_stops_the_run() {
    let (calls, mut factory, mut builder) = mocks(true);
    factory.fail_make = true;
    let result = TrainingDriver::new(DriverConfig::default()).run(&mut factory, &mut builder);

    assert!(result.is_err());
    assert_eq!(
        *calls.borrow(),
        vec![
            Call::BuildAgent(2),
            Call::Make("PongDeterministic-v4".to_string())
        ]
    );
}

#[test]
fn test_invalid_config_calls_nothing() {
    let (calls, mut factory, mut builder) = mocks(true);
    let config = DriverConfig::default().action_repeat(3, 2);
    let err = TrainingDriver::new(config)
        .run(&mut factory, &mut builder)
        .err()
        .expect("configuration must be rejected");

    assert!(matches!(
        err.downcast_ref::<DriverError>(),
        Some(DriverError::InvalidConfig(_))
    ));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_action_count_mismatch_is_not_fatal() -> Result<()> {
    let (calls, mut factory, mut builder) = mocks(true);
    factory.n_actions = 6;
    TrainingDriver::new(DriverConfig::default()).run(&mut factory, &mut builder)?;
    assert!(matches!(calls.borrow().last(), Some(Call::Train(..))));
    Ok(())
}

#[test]
fn test_custom_config_flows_through() -> Result<()> {
    let (calls, mut factory, mut builder) = mocks(true);
    let config = DriverConfig::default()
        .action_count(6)
        .env_id("BreakoutDeterministic-v4")
        .episodic_life(true)
        .action_repeat(4, 4)
        .reserved_flag(true)
        .checkpoint_path("breakout.torch")
        .batch_size(64);
    factory.n_actions = 6;
    let driver = TrainingDriver::new(config.clone());
    assert_eq!(driver.config(), &config);
    driver.run(&mut factory, &mut builder)?;

    let calls = calls.borrow();
    assert_eq!(calls[0], Call::BuildAgent(6));
    assert_eq!(calls[3], Call::LoadWeights(PathBuf::from("breakout.torch")));
    match &calls[4] {
        Call::Train(params, adapter_config, id) => {
            assert_eq!(params.batch_size, 64);
            assert_eq!(
                *adapter_config,
                expected_adapter_config()
                    .episodic_life(true)
                    .action_repeat(4, 4)
                    .reserved_flag(true)
            );
            assert_eq!(id, "BreakoutDeterministic-v4");
        }
        c => panic!("unexpected call {:?}", c),
    }
    Ok(())
}
