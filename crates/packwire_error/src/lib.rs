use std::ops::{Deref, DerefMut};

/// Configuration errors are fatal: they abort before the external bundler is
/// ever invoked. Collected as a `Vec` so every missing input can be reported
/// in one pass.
#[derive(Debug)]
pub struct ConfigError(pub Vec<anyhow::Error>);

impl ConfigError {
  pub fn msg<M>(message: M) -> Self
  where
    M: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
  {
    Self(vec![anyhow::Error::msg(message)])
  }
}

impl Deref for ConfigError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for ConfigError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for ConfigError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for ConfigError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type ConfigResult<T> = anyhow::Result<T, ConfigError>;
