//! Environment factory.
use super::Env;
use anyhow::Result;

/// Creates environments by name and applies the frame-preprocessing wrapper.
///
/// The wrapper typically warps and grayscales frames, stacks them and clips
/// observations; the exact transform belongs to the implementor.
pub trait EnvFactory {
    /// Environment as created by [`EnvFactory::make`].
    type Raw;

    /// Environment after preprocessing.
    type Wrapped: Env;

    /// Creates a raw environment, e.g. `"PongDeterministic-v4"`.
    fn make(&mut self, id: &str) -> Result<Self::Raw>;

    /// Applies the frame-preprocessing wrapper to a raw environment.
    fn wrap(&mut self, raw: Self::Raw) -> Result<Self::Wrapped>;
}
