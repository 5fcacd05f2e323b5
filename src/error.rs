use std::io;

use rustyline::error::ReadlineError;

use crate::core::{command::ExitCode, flags::FlagError};

/// Failures reported by the Riot API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("no API key configured (set RIOT_API_KEY or api_key in the config file)")]
    MissingApiKey,
    #[error("API key rejected")]
    Unauthorized,
    #[error("rate limited, retry after {}s", .retry_after.unwrap_or(1))]
    RateLimited { retry_after: Option<u64> },
    #[error("API returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("API session is closed")]
    Closed,
}

/// Failures a command handler reports back to the shell
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(String),
    #[error(transparent)]
    Flag(#[from] FlagError),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CommandError::Usage(_) | CommandError::Flag(_) => -1,
            CommandError::NotFound(_) | CommandError::Api(ApiError::NotFound(_)) => -2,
            CommandError::Api(ApiError::MissingApiKey | ApiError::Unauthorized) => -3,
            CommandError::Api(ApiError::RateLimited { .. }) => -4,
            CommandError::Api(_) => -5,
            CommandError::Io(_) => -6,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("config file {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("line editor: {0}")]
    Readline(#[from] ReadlineError),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
