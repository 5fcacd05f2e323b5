mod current_match;
mod help;
mod ranked_info;
mod summoner_info;
mod summoner_stats;

pub use current_match::CurrentMatch;
pub use help::Help;
pub use ranked_info::RankedInfo;
pub use summoner_info::SummonerInfo;
pub use summoner_stats::SummonerStats;

use crate::{api::Account, core::command::CommandContext, error::CommandError};

/// A `gameName#tagLine` player identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl RiotId {
    /// Builds a Riot ID from positional arguments.
    ///
    /// Game names may contain spaces, so the tokens are joined back together.
    /// Without a `#tag` the configured default tag is used.
    pub fn from_args(args: &[String], default_tag: &str, usage: &str) -> Result<Self, CommandError> {
        let joined = args.join(" ");
        let joined = joined.trim();
        if joined.is_empty() {
            return Err(CommandError::Usage(usage.to_string()));
        }

        let (game_name, tag_line) = match joined.rsplit_once('#') {
            Some((name, tag)) => (name.trim(), tag.trim()),
            None => (joined, default_tag),
        };
        if game_name.is_empty() || tag_line.is_empty() {
            return Err(CommandError::Usage(usage.to_string()));
        }

        Ok(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }

    pub fn resolve(&self, ctx: &CommandContext<'_>) -> Result<Account, CommandError> {
        Ok(ctx.api.account_by_riot_id(&self.game_name, &self.tag_line)?)
    }
}
