use serde::Deserialize;

/// account-v1 AccountDto
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

impl Account {
    pub fn riot_id(&self) -> String {
        match (&self.game_name, &self.tag_line) {
            (Some(name), Some(tag)) => format!("{}#{}", name, tag),
            (Some(name), None) => name.clone(),
            _ => self.puuid.clone(),
        }
    }
}

/// summoner-v4 SummonerDto
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    pub puuid: String,
    pub profile_icon_id: u32,
    pub summoner_level: u64,
}

/// league-v4 LeagueEntryDTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    pub league_points: i32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub inactive: bool,
}

impl LeagueEntry {
    pub fn queue_name(&self) -> &str {
        match self.queue_type.as_str() {
            "RANKED_SOLO_5x5" => "Ranked Solo/Duo",
            "RANKED_FLEX_SR" => "Ranked Flex",
            "RANKED_TFT_DOUBLE_UP" => "TFT Double Up",
            other => other,
        }
    }
}

/// spectator-v5 CurrentGameInfo
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGame {
    pub game_id: u64,
    pub game_mode: String,
    #[serde(default)]
    pub game_type: String,
    /// Seconds since the game started
    #[serde(default)]
    pub game_length: i64,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub banned_champions: Vec<BannedChampion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub team_id: u32,
    pub champion_id: i64,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub riot_id: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannedChampion {
    pub team_id: u32,
    pub champion_id: i64,
}

/// champion-mastery-v4 ChampionMasteryDto
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMastery {
    pub champion_id: i64,
    pub champion_level: u32,
    pub champion_points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_entry_from_json() {
        let json = r#"{
            "leagueId": "abc",
            "queueType": "RANKED_SOLO_5x5",
            "tier": "GOLD",
            "rank": "II",
            "puuid": "p",
            "leaguePoints": 54,
            "wins": 120,
            "losses": 100,
            "hotStreak": true,
            "veteran": false,
            "freshBlood": false,
            "inactive": false
        }"#;
        let entry: LeagueEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.queue_name(), "Ranked Solo/Duo");
        assert_eq!(entry.league_points, 54);
        assert!(entry.hot_streak);
    }

    #[test]
    fn test_current_game_without_bans() {
        let json = r#"{
            "gameId": 1,
            "gameMode": "ARAM",
            "gameLength": 300,
            "participants": [
                {"teamId": 100, "championId": 157, "riotId": "Faker#KR1", "bot": false}
            ]
        }"#;
        let game: CurrentGame = serde_json::from_str(json).unwrap();
        assert_eq!(game.participants.len(), 1);
        assert!(game.banned_champions.is_empty());
        assert_eq!(game.participants[0].riot_id.as_deref(), Some("Faker#KR1"));
    }

    #[test]
    fn test_account_riot_id() {
        let account = Account {
            puuid: "p".into(),
            game_name: Some("Hide on bush".into()),
            tag_line: Some("KR1".into()),
        };
        assert_eq!(account.riot_id(), "Hide on bush#KR1");
    }
}
