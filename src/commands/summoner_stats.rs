use colored::Colorize;

use super::RiotId;
use crate::{
    core::{
        command::{exit_code_for, Command, CommandContext, CommandResult, ExitCode},
        flags::{FlagError, Flags},
        options::CommandOptions,
    },
    utils,
};

const USAGE: &str = "summoner-stats <name>#<tag> [-n count]";

/// Upper bound for `-n`
const MAX_COUNT: usize = 50;

#[derive(Default)]
pub struct SummonerStats {
    exit_code: ExitCode,
}

impl SummonerStats {
    fn lookup(&self, opts: &CommandOptions, ctx: &mut CommandContext<'_>) -> CommandResult {
        let flags = Flags::parse(opts.args(), &[], &['n'])?;
        let count = flags.parse_value('n', ctx.config.mastery_count)?;
        if count == 0 || count > MAX_COUNT {
            return Err(FlagError::InvalidValue('n', count.to_string()).into());
        }
        let riot_id = RiotId::from_args(flags.positionals(), &ctx.config.default_tag, USAGE)?;

        let account = riot_id.resolve(ctx)?;
        let score = ctx.api.mastery_score(&account.puuid)?;
        let masteries = ctx.api.top_masteries(&account.puuid, count)?;

        writeln!(ctx.output, "{}", account.riot_id().bold())?;
        writeln!(ctx.output, "  Mastery score: {}", score)?;
        if masteries.is_empty() {
            writeln!(ctx.output, "  No champion mastery yet")?;
            return Ok(());
        }

        writeln!(ctx.output, "  {}", utils::rule())?;
        for (i, mastery) in masteries.iter().enumerate() {
            writeln!(
                ctx.output,
                "  {:>2}. champion {:<5} level {:<3} {:>12} pts",
                i + 1,
                mastery.champion_id,
                mastery.champion_level,
                utils::group_thousands(mastery.champion_points)
            )?;
        }
        Ok(())
    }
}

impl Command for SummonerStats {
    fn name(&self) -> &'static str {
        "summoner-stats"
    }

    fn description(&self) -> &'static str {
        "Show a player's mastery score and top champions"
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
