use std::time::Duration;

use log::{debug, info, warn};
use serde::{de::DeserializeOwned, Deserialize};
use ureq::{Agent, AgentBuilder};

use super::{Account, ApiResult, ChampionMastery, CurrentGame, LeagueEntry, Summoner, SummonerApi};
use crate::{config::Config, error::ApiError};

const USER_AGENT: &str = concat!("leaguecli/", env!("CARGO_PKG_VERSION"));

/// Blocking Riot API client backed by a `ureq` agent
pub struct RiotClient {
    agent: Option<Agent>,
    api_key: String,
    platform_host: String,
    region_host: String,
}

/// Error body Riot returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct RiotErrorBody {
    status: RiotStatus,
}

#[derive(Debug, Deserialize)]
struct RiotStatus {
    message: String,
}

impl RiotClient {
    pub fn new(config: &Config) -> Self {
        let agent = AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build();

        if config.api_key.is_empty() {
            warn!("No Riot API key configured, API commands will fail");
        }

        Self {
            agent: Some(agent),
            api_key: config.api_key.clone(),
            platform_host: format!("https://{}.api.riotgames.com", config.platform.to_lowercase()),
            region_host: format!("https://{}.api.riotgames.com", config.region().to_lowercase()),
        }
    }

    fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> ApiResult<T> {
        let agent = self.agent.as_ref().ok_or(ApiError::Closed)?;
        if self.api_key.is_empty() {
            return Err(ApiError::MissingApiKey);
        }

        debug!("GET {}", url);
        let mut request = agent.get(url).set("X-Riot-Token", &self.api_key);
        for (key, value) in query {
            request = request.query(key, value);
        }

        match request.call() {
            Ok(response) => response
                .into_json::<T>()
                .map_err(|e| ApiError::Decode(e.to_string())),
            Err(ureq::Error::Status(404, _)) => Err(ApiError::NotFound(what.to_string())),
            Err(ureq::Error::Status(401 | 403, _)) => Err(ApiError::Unauthorized),
            Err(ureq::Error::Status(429, response)) => Err(ApiError::RateLimited {
                retry_after: response.header("Retry-After").and_then(|v| v.parse().ok()),
            }),
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(ApiError::Status {
                    code,
                    message: error_message(&body),
                })
            }
            Err(ureq::Error::Transport(transport)) => Err(ApiError::Transport(transport.to_string())),
        }
    }
}

impl SummonerApi for RiotClient {
    fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> ApiResult<Account> {
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.region_host,
            encode_segment(game_name),
            encode_segment(tag_line)
        );
        self.get(&url, &[], &format!("player {}#{}", game_name, tag_line))
    }

    fn summoner_by_puuid(&self, puuid: &str) -> ApiResult<Summoner> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform_host,
            encode_segment(puuid)
        );
        self.get(&url, &[], "summoner")
    }

    fn league_entries(&self, puuid: &str) -> ApiResult<Vec<LeagueEntry>> {
        let url = format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            self.platform_host,
            encode_segment(puuid)
        );
        self.get(&url, &[], "league entries")
    }

    fn active_game(&self, puuid: &str) -> ApiResult<CurrentGame> {
        let url = format!(
            "{}/lol/spectator/v5/active-games/by-summoner/{}",
            self.platform_host,
            encode_segment(puuid)
        );
        self.get(&url, &[], "active game (player is not in a game)")
    }

    fn top_masteries(&self, puuid: &str, count: usize) -> ApiResult<Vec<ChampionMastery>> {
        let url = format!(
            "{}/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/top",
            self.platform_host,
            encode_segment(puuid)
        );
        self.get(&url, &[("count", count.to_string())], "champion masteries")
    }

    fn mastery_score(&self, puuid: &str) -> ApiResult<u32> {
        let url = format!(
            "{}/lol/champion-mastery/v4/scores/by-puuid/{}",
            self.platform_host,
            encode_segment(puuid)
        );
        self.get(&url, &[], "mastery score")
    }

    fn tear_down(&mut self) {
        if self.agent.take().is_some() {
            info!("Closed Riot API session");
        }
    }
}

/// Percent-encodes a URL path segment, keeping RFC 3986 unreserved characters
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<RiotErrorBody>(body)
        .map(|b| b.status.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
