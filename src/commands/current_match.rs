use std::io::Write;

use colored::Colorize;

use super::RiotId;
use crate::{
    api::{Account, CurrentGame},
    core::{
        command::{exit_code_for, Command, CommandContext, CommandResult, ExitCode},
        flags::Flags,
        options::CommandOptions,
    },
    error::{ApiError, CommandError},
    utils,
};

const USAGE: &str = "current-match <name>#<tag> [-b]";

const BLUE_TEAM: u32 = 100;
const RED_TEAM: u32 = 200;

#[derive(Default)]
pub struct CurrentMatch {
    exit_code: ExitCode,
}

impl CurrentMatch {
    fn lookup(&self, opts: &CommandOptions, ctx: &mut CommandContext<'_>) -> CommandResult {
        let flags = Flags::parse(opts.args(), &['b'], &[])?;
        let riot_id = RiotId::from_args(flags.positionals(), &ctx.config.default_tag, USAGE)?;

        let account = riot_id.resolve(ctx)?;
        let game = match ctx.api.active_game(&account.puuid) {
            Ok(game) => game,
            Err(ApiError::NotFound(_)) => {
                return Err(CommandError::NotFound(format!(
                    "{} is not in a game",
                    account.riot_id()
                )))
            }
            Err(e) => return Err(e.into()),
        };

        write_game(ctx.output, &account, &game, flags.has_flag('b'))?;
        Ok(())
    }
}

fn write_game(
    out: &mut dyn Write,
    account: &Account,
    game: &CurrentGame,
    show_bans: bool,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{} game {} ({} {}, {})",
        account.riot_id().bold(),
        game.game_id,
        game.game_mode,
        game.game_type.to_lowercase(),
        utils::format_duration(game.game_length)
    )?;

    for (team_id, label) in [(BLUE_TEAM, "Blue team".blue()), (RED_TEAM, "Red team".red())] {
        writeln!(out, "  {}", label)?;
        for p in game.participants.iter().filter(|p| p.team_id == team_id) {
            let name = p.riot_id.as_deref().unwrap_or("unknown");
            let name = if p.puuid.as_deref() == Some(account.puuid.as_str()) {
                format!("{} *", name).bold()
            } else if p.bot {
                format!("{} (bot)", name).dimmed()
            } else {
                name.normal()
            };
            writeln!(out, "    champion {:<5} {}", p.champion_id, name)?;
        }

        if show_bans {
            let bans: Vec<String> = game
                .banned_champions
                .iter()
                .filter(|b| b.team_id == team_id && b.champion_id >= 0)
                .map(|b| b.champion_id.to_string())
                .collect();
            if !bans.is_empty() {
                writeln!(out, "    bans: {}", bans.join(", "))?;
            }
        }
    }
    Ok(())
}

impl Command for CurrentMatch {
    fn name(&self) -> &'static str {
        "current-match"
    }

    fn description(&self) -> &'static str {
        "Show the live game a player is in"
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
