use colored::Colorize;

use crate::{
    core::{
        command::{exit_code_for, Command, CommandContext, CommandResult, ExitCode},
        flags::Flags,
        options::CommandOptions,
    },
    error::CommandError,
};

#[derive(Default)]
pub struct Help {
    exit_code: ExitCode,
}

impl Help {
    fn describe(&self, opts: &CommandOptions, ctx: &mut CommandContext<'_>) -> CommandResult {
        let flags = Flags::parse(opts.args(), &[], &[])?;
        let topic = flags.positionals().iter().find(|arg| !arg.is_empty());

        match topic {
            Some(topic) => {
                let info = ctx
                    .commands
                    .iter()
                    .find(|info| info.name == topic.as_str())
                    .ok_or_else(|| CommandError::NotFound(format!("no help for {}", topic)))?;
                writeln!(ctx.output, "{}", info.usage.bold())?;
                writeln!(ctx.output, "  {}", info.description)?;
            }
            None => {
                let width = ctx.commands.iter().map(|info| info.name.len()).max().unwrap_or(0);
                writeln!(ctx.output, "Available commands:")?;
                for info in ctx.commands {
                    writeln!(
                        ctx.output,
                        "  {:<width$}  {}",
                        info.name.green(),
                        info.description,
                        width = width
                    )?;
                }
                writeln!(ctx.output, "  {:<width$}  Leave the shell", "exit".green(), width = width)?;
            }
        }
        Ok(())
    }
}

impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "List commands, or show usage for one command"
    }

    fn usage(&self) -> &'static str {
        "help [command]"
    }

    fn run(&mut self, opts: &CommandOptions, ctx: &mut CommandContext<'_>) -> CommandResult {
        let result = self.describe(opts, ctx);
        self.exit_code = exit_code_for(&result);
        result
    }

    fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}
