use colored::Colorize;

use super::RiotId;
use crate::{
    api::LeagueEntry,
    core::{
        command::{exit_code_for, Command, CommandContext, CommandResult, ExitCode},
        flags::Flags,
        options::CommandOptions,
    },
    utils,
};

const USAGE: &str = "ranked-info <name>#<tag> [-s]";
const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

#[derive(Default)]
pub struct RankedInfo {
    exit_code: ExitCode,
}

impl RankedInfo {
    fn lookup(&self, opts: &CommandOptions, ctx: &mut CommandContext<'_>) -> CommandResult {
        let flags = Flags::parse(opts.args(), &['s'], &[])?;
        let riot_id = RiotId::from_args(flags.positionals(), &ctx.config.default_tag, USAGE)?;

        let account = riot_id.resolve(ctx)?;
        let mut entries = ctx.api.league_entries(&account.puuid)?;
        if flags.has_flag('s') {
            entries.retain(|e| e.queue_type == SOLO_QUEUE);
        }
        // solo queue first
        entries.sort_by_key(|e| e.queue_type != SOLO_QUEUE);

        writeln!(ctx.output, "{}", account.riot_id().bold())?;
        if entries.is_empty() {
            writeln!(ctx.output, "  Unranked")?;
            return Ok(());
        }

        for entry in &entries {
            writeln!(ctx.output, "  {}", format_entry(entry))?;
        }
        Ok(())
    }
}

fn format_entry(entry: &LeagueEntry) -> String {
    let mut line = format!(
        "{:<16} {} {:<3} {:>4} LP  {}W {}L ({:.1}%)",
        entry.queue_name(),
        utils::colorize_tier(&entry.tier),
        entry.rank,
        entry.league_points,
        entry.wins,
        entry.losses,
        utils::win_rate(entry.wins, entry.losses)
    );

    let markers: Vec<&str> = [
        (entry.hot_streak, "hot streak"),
        (entry.veteran, "veteran"),
        (entry.fresh_blood, "fresh blood"),
        (entry.inactive, "inactive"),
    ]
    .into_iter()
    .filter_map(|(set, label)| set.then_some(label))
    .collect();

    if !markers.is_empty() {
        line.push_str(&format!("  [{}]", markers.join(", ")));
    }
    line
}

impl Command for RankedInfo {
    fn name(&self) -> &'static str {
        "ranked-info"
    }

    fn description(&self) -> &'static str {
        "Show a player's ranked tier, LP and win rate per queue"
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
