//! Environment step.

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`.
///
/// An environment emits a [`Step`] at every interaction step. Agents use it to
/// create transitions `(o_t, a_t, o_t+1, r_t)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<O> {
    /// Action.
    pub act: usize,

    /// Observation.
    pub obs: O,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if episode is terminated.
    pub is_terminated: bool,

    /// Flag denoting if episode is truncated.
    pub is_truncated: bool,
}

impl<O> Step<O> {
    /// Constructs a [`Step`] object.
    pub fn new(obs: O, act: usize, reward: f32, is_terminated: bool, is_truncated: bool) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}
