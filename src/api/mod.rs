mod client;
mod models;

pub use client::RiotClient;
pub use models::{Account, ChampionMastery, CurrentGame, LeagueEntry, Summoner};
#[cfg(test)]
pub use models::{BannedChampion, Participant};

use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// The Riot API endpoints the shell commands call
pub trait SummonerApi {
    fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> ApiResult<Account>;
    fn summoner_by_puuid(&self, puuid: &str) -> ApiResult<Summoner>;
    fn league_entries(&self, puuid: &str) -> ApiResult<Vec<LeagueEntry>>;
    fn active_game(&self, puuid: &str) -> ApiResult<CurrentGame>;
    fn top_masteries(&self, puuid: &str, count: usize) -> ApiResult<Vec<ChampionMastery>>;
    fn mastery_score(&self, puuid: &str) -> ApiResult<u32>;

    /// Releases the underlying session. Called once when the shell exits.
    fn tear_down(&mut self);
}
