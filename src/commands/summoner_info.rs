use colored::Colorize;

use super::RiotId;
use crate::core::{
    command::{exit_code_for, Command, CommandContext, CommandResult, ExitCode},
    flags::Flags,
    options::CommandOptions,
};

const USAGE: &str = "summoner-info <name>#<tag>";

#[derive(Default)]
pub struct SummonerInfo {
    exit_code: ExitCode,
}

impl SummonerInfo {
    fn lookup(&self, opts: &CommandOptions, ctx: &mut CommandContext<'_>) -> CommandResult {
        let flags = Flags::parse(opts.args(), &[], &[])?;
        let riot_id = RiotId::from_args(flags.positionals(), &ctx.config.default_tag, USAGE)?;

        let account = riot_id.resolve(ctx)?;
        let summoner = ctx.api.summoner_by_puuid(&account.puuid)?;

        writeln!(ctx.output, "{}", account.riot_id().bold())?;
        writeln!(ctx.output, "  Level:        {}", summoner.summoner_level)?;
        writeln!(ctx.output, "  Profile icon: {}", summoner.profile_icon_id)?;
        writeln!(ctx.output, "  PUUID:        {}", summoner.puuid.dimmed())?;
        Ok(())
    }
}

impl Command for SummonerInfo {
    fn name(&self) -> &'static str {
        "summoner-info"
    }

    fn description(&self) -> &'static str {
        "Show a player's summoner level and profile"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn run(&mut self, opts: &CommandOptions, ctx: &mut CommandContext<'_>) -> CommandResult {
        let result = self.lookup(opts, ctx);
        self.exit_code = exit_code_for(&result);
        result
    }

    fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}
