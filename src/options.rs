use crate::constants::server;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Server variable holding the deployment environment tag (`dev`, `prod`, ...).
    pub environment_key: String,
    /// Honour `X-HTTP-Method-Override` when resolving the request method.
    pub allow_method_override: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            environment_key: server::ENVIRONMENT.to_string(),
            allow_method_override: true,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("The environment key must not be empty.")]
    EmptyEnvironmentKey,
}

impl RequestOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.environment_key.trim().is_empty() {
            return Err(OptionsError::EmptyEnvironmentKey);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
