use colored::Colorize;
use log::{debug, info, warn};
use std::{
    cell::Cell,
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
    sync::Once,
};

use crate::{
    api::SummonerApi,
    config::Config,
    core::{
        command::{Command, CommandContext, CommandResult, ExitCode},
        options::CommandOptions,
        reader::{EditorReader, Line, LineReader},
        registry::CommandRegistry,
    },
    error::ShellError,
};

const EXIT_COMMAND: &str = "exit";

thread_local! {
    static IN_COMMAND: Cell<bool> = const { Cell::new(false) };
}

/// Routes panics raised inside a command to the log instead of stderr.
///
/// Panics elsewhere still reach the previous hook.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_COMMAND.with(Cell::get) {
                debug!("command panicked: {}", info);
            } else {
                previous(info);
            }
        }));
    });
}

/// Output stream and settings shared with every command
pub struct ShellContext {
    pub config: Config,
    pub output: Box<dyn Write>,
}

impl ShellContext {
    pub fn new(config: Config, output: Box<dyn Write>) -> Self {
        Self { config, output }
    }

    pub fn stdout(config: Config) -> Self {
        Self::new(config, Box::new(io::stdout()))
    }
}

pub struct Shell {
    ctx: ShellContext,
    api: Box<dyn SummonerApi>,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new(ctx: ShellContext, api: Box<dyn SummonerApi>) -> Self {
        Self::with_registry(ctx, api, CommandRegistry::setup())
    }

    pub fn with_registry(
        ctx: ShellContext,
        api: Box<dyn SummonerApi>,
        registry: CommandRegistry,
    ) -> Self {
        Self { ctx, api, registry }
    }

    /// Registers a command, replacing any command with the same name
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        self.registry.register(command);
    }

    /// Runs the interactive loop on the terminal
    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut names = self.registry.get_commands();
        names.push(EXIT_COMMAND);

        let history_path = self.ctx.config.history_path();
        self.start(|| EditorReader::new(names, history_path))
    }

    /// Opens a reader and runs the loop; if opening fails the loop never starts
    pub fn start<R, F>(&mut self, open: F) -> Result<(), ShellError>
    where
        R: LineReader,
        F: FnOnce() -> Result<R, ShellError>,
    {
        let reader = open()?;
        self.run_with(reader)
    }

    /// Runs the loop until `exit` or end of input, then tears the API client down
    pub fn run_with<R: LineReader>(&mut self, mut reader: R) -> Result<(), ShellError> {
        loop {
            let line = match reader.read_line(&self.ctx.config.prompt) {
                Ok(Line::Input(line)) => line,
                Ok(Line::Interrupted) => continue,
                Ok(Line::Eof) => break,
                Err(e) => {
                    warn!("Unable to read input: {}", e);
                    break;
                }
            };

            // only the bare keyword ends the loop
            if line == EXIT_COMMAND {
                break;
            }
            self.parse_and_run(&line);
        }

        reader.finish();
        self.api.tear_down();
        Ok(())
    }

    fn parse_and_run(&mut self, input: &str) {
        let Some(opts) = CommandOptions::parse(input) else {
            warn!("Unable to parse, or no arguments to parse.");
            return;
        };
        if opts.command_name() == EXIT_COMMAND {
            return;
        }
        info!("{}", opts.command_name());

        let commands = self.registry.infos();
        let Some(cmd) = self.registry.get_mut(opts.command_name()) else {
            warn!("Unrecognized command: {}", opts.command_name());
            return;
        };

        let mut ctx = CommandContext {
            config: &self.ctx.config,
            api: self.api.as_ref(),
            output: self.ctx.output.as_mut(),
            commands: &commands,
        };

        IN_COMMAND.with(|flag| flag.set(true));
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| cmd.run(&opts, &mut ctx)));
        IN_COMMAND.with(|flag| flag.set(false));

        let result = match outcome {
            Ok(result) => result,
            Err(_) => {
                warn!("Command Failed with exit code: {}", cmd.exit_code());
                return;
            }
        };

        if let Err(e) = report(ctx.output, &result, cmd.exit_code()) {
            warn!("Unable to write command output: {}", e);
        }
    }
}

fn report(out: &mut dyn Write, result: &CommandResult, exit_code: ExitCode) -> io::Result<()> {
    if let Err(e) = result {
        writeln!(out, "{}", e.to_string().red())?;
    }
    if exit_code < 0 {
        writeln!(out, "Command Failed with exit code: {}", exit_code)?;
    }
    out.flush()
}
