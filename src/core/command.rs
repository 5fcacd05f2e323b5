use std::io::Write;

use super::options::CommandOptions;
use crate::{api::SummonerApi, config::Config, error::CommandError};

/// Per-command outcome; negative values mean failure
pub type ExitCode = i32;

pub const SUCCESS: ExitCode = 0;

pub type CommandResult = Result<(), CommandError>;

/// Name and help text of a registered command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

/// Everything a command may touch while it runs
pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub api: &'a dyn SummonerApi,
    pub output: &'a mut dyn Write,
    /// Snapshot of the registry, sorted by name
    pub commands: &'a [CommandInfo],
}

pub trait Command {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn usage(&self) -> &'static str {
        self.name()
    }

    /// Runs the command and records its exit code.
    ///
    /// Expected failures come back as `Err`; panics are bugs.
    fn run(&mut self, opts: &CommandOptions, ctx: &mut CommandContext<'_>) -> CommandResult;

    /// Exit code of the last `run`
    fn exit_code(&self) -> ExitCode;

    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: self.name(),
            description: self.description(),
            usage: self.usage(),
        }
    }
}

pub fn exit_code_for(result: &CommandResult) -> ExitCode {
    match result {
        Ok(()) => SUCCESS,
        Err(e) => e.exit_code(),
    }
}
