use serde::Deserialize;

/// Buffer bounds applied by [`crate::client::Client`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Longest request the client will hand to the transport.
    ///
    /// Default: 1024
    #[serde(default = "default_capacity")]
    pub request_capacity: usize,

    /// Longest response the client will accept back.
    ///
    /// Default: 1024
    #[serde(default = "default_capacity")]
    pub response_capacity: usize,
}

fn default_capacity() -> usize {
    1024
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} cannot be 0")]
    ZeroCapacity(&'static str),
}

impl ClientConfig {
    /// # Errors
    ///
    /// Fails when either capacity is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("request_capacity"));
        }
        if self.response_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("response_capacity"));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_capacity: default_capacity(),
            response_capacity: default_capacity(),
        }
    }
}
