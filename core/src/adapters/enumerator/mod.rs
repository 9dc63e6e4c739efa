//! Socket enumeration adapters.
//!
//! Platform-specific selection of the enumeration command.

mod command;

#[cfg(target_os = "linux")]
mod linux;

pub use command::CommandEnumerator;

use crate::config::EnumeratorConfig;
use crate::error::{Error, Result};
use crate::ports::PortEnumerator;

/// The enumerator for the current platform, or the one named in config.
#[derive(Debug, Clone)]
pub struct SocketEnumerator {
    inner: CommandEnumerator,
}

impl SocketEnumerator {
    /// Create the default enumerator for the current platform.
    pub fn new() -> Result<Self> {
        #[cfg(target_os = "linux")]
        {
            Ok(Self { inner: linux::ss() })
        }

        #[cfg(not(target_os = "linux"))]
        {
            Err(Error::UnsupportedPlatform(format!(
                "no default socket enumerator for {}; set enumerator.program in the config",
                std::env::consts::OS
            )))
        }
    }

    /// Create an enumerator from configuration.
    ///
    /// Falls back to the platform default when no program is configured.
    pub fn from_config(config: &EnumeratorConfig) -> Result<Self> {
        match &config.program {
            Some(program) if program.trim().is_empty() => Err(Error::Config(
                "enumerator.program must not be empty".to_string(),
            )),
            Some(program) => Ok(Self {
                inner: CommandEnumerator::new(program.clone(), config.args.clone()),
            }),
            None => Self::new(),
        }
    }

    /// The command line this enumerator runs.
    pub fn command_line(&self) -> String {
        self.inner.command_line()
    }
}

impl PortEnumerator for SocketEnumerator {
    async fn enumerate(&self) -> Result<String> {
        self.inner.enumerate().await
    }
}
