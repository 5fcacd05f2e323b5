//! Fakes shared by the unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    io::{self, Write},
    rc::Rc,
    sync::Once,
};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::{
    api::{
        Account, ApiResult, BannedChampion, ChampionMastery, CurrentGame, LeagueEntry,
        Participant, Summoner, SummonerApi,
    },
    config::Config,
    core::{
        command::{exit_code_for, Command, CommandContext, CommandResult, ExitCode, SUCCESS},
        options::CommandOptions,
        registry::CommandRegistry,
    },
    error::{ApiError, CommandError},
};

pub const FAKER_PUUID: &str = "faker-puuid";

/// In-memory `SummonerApi` with one well-known player, `Faker#KR1`
pub struct FakeApi {
    pub accounts: HashMap<String, Account>,
    pub summoners: HashMap<String, Summoner>,
    pub entries: HashMap<String, Vec<LeagueEntry>>,
    pub games: HashMap<String, CurrentGame>,
    pub masteries: HashMap<String, Vec<ChampionMastery>>,
    pub scores: HashMap<String, u32>,
    /// Every call fails with this error when set
    pub error: Option<fn() -> ApiError>,
    pub teardowns: Rc<Cell<usize>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let mut api = Self {
            accounts: HashMap::new(),
            summoners: HashMap::new(),
            entries: HashMap::new(),
            games: HashMap::new(),
            masteries: HashMap::new(),
            scores: HashMap::new(),
            error: None,
            teardowns: Rc::new(Cell::new(0)),
        };

        api.accounts.insert(
            "Faker#KR1".to_string(),
            Account {
                puuid: FAKER_PUUID.to_string(),
                game_name: Some("Faker".to_string()),
                tag_line: Some("KR1".to_string()),
            },
        );
        api.summoners.insert(
            FAKER_PUUID.to_string(),
            Summoner {
                puuid: FAKER_PUUID.to_string(),
                profile_icon_id: 6,
                summoner_level: 712,
            },
        );
        api.entries.insert(
            FAKER_PUUID.to_string(),
            vec![
                entry("RANKED_SOLO_5x5", "CHALLENGER", "I", 1204, 300, 200, true),
                entry("RANKED_FLEX_SR", "GOLD", "II", 54, 3, 1, false),
            ],
        );
        api.games.insert(
            FAKER_PUUID.to_string(),
            CurrentGame {
                game_id: 42,
                game_mode: "CLASSIC".to_string(),
                game_type: "MATCHED".to_string(),
                game_length: 754,
                participants: vec![
                    participant(100, 7, Some(FAKER_PUUID), "Faker#KR1"),
                    participant(100, 64, None, "Oner#KR1"),
                    participant(200, 238, None, "Chovy#KR1"),
                ],
                banned_champions: vec![BannedChampion {
                    team_id: 200,
                    champion_id: 157,
                }],
            },
        );
        api.masteries.insert(
            FAKER_PUUID.to_string(),
            vec![
                mastery(7, 10, 1_250_000),
                mastery(4, 9, 730_500),
                mastery(61, 7, 402_000),
            ],
        );
        api.scores.insert(FAKER_PUUID.to_string(), 1523);
        api
    }

    pub fn failing(error: fn() -> ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::new()
        }
    }

    fn check(&self) -> ApiResult<()> {
        match self.error {
            Some(error) => Err(error()),
            None => Ok(()),
        }
    }

    fn lookup<T: Clone>(map: &HashMap<String, T>, key: &str, what: &str) -> ApiResult<T> {
        map.get(key)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(what.to_string()))
    }
}

impl SummonerApi for FakeApi {
    fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> ApiResult<Account> {
        self.check()?;
        let id = format!("{}#{}", game_name, tag_line);
        Self::lookup(&self.accounts, &id, &format!("player {}", id))
    }

    fn summoner_by_puuid(&self, puuid: &str) -> ApiResult<Summoner> {
        self.check()?;
        Self::lookup(&self.summoners, puuid, "summoner")
    }

    fn league_entries(&self, puuid: &str) -> ApiResult<Vec<LeagueEntry>> {
        self.check()?;
        Ok(self.entries.get(puuid).cloned().unwrap_or_default())
    }

    fn active_game(&self, puuid: &str) -> ApiResult<CurrentGame> {
        self.check()?;
        Self::lookup(&self.games, puuid, "active game")
    }

    fn top_masteries(&self, puuid: &str, count: usize) -> ApiResult<Vec<ChampionMastery>> {
        self.check()?;
        let all = self.masteries.get(puuid).cloned().unwrap_or_default();
        Ok(all.into_iter().take(count).collect())
    }

    fn mastery_score(&self, puuid: &str) -> ApiResult<u32> {
        self.check()?;
        Ok(self.scores.get(puuid).copied().unwrap_or_default())
    }

    fn tear_down(&mut self) {
        self.teardowns.set(self.teardowns.get() + 1);
    }
}

fn entry(
    queue: &str,
    tier: &str,
    rank: &str,
    lp: i32,
    wins: u32,
    losses: u32,
    hot_streak: bool,
) -> LeagueEntry {
    LeagueEntry {
        queue_type: queue.to_string(),
        tier: tier.to_string(),
        rank: rank.to_string(),
        league_points: lp,
        wins,
        losses,
        hot_streak,
        veteran: false,
        fresh_blood: false,
        inactive: false,
    }
}

fn participant(team_id: u32, champion_id: i64, puuid: Option<&str>, riot_id: &str) -> Participant {
    Participant {
        team_id,
        champion_id,
        puuid: puuid.map(str::to_string),
        riot_id: Some(riot_id.to_string()),
        bot: false,
    }
}

fn mastery(champion_id: i64, level: u32, points: u64) -> ChampionMastery {
    ChampionMastery {
        champion_id,
        champion_level: level,
        champion_points: points,
    }
}

/// Runs one command line against a handler and returns the result and the uncolored output
pub fn run_line(cmd: &mut dyn Command, api: &FakeApi, line: &str) -> (CommandResult, String) {
    colored::control::set_override(false);

    let config = Config::default();
    let infos = CommandRegistry::setup().infos();
    let opts = CommandOptions::parse(line).expect("test line has a command");
    let mut output = Vec::new();

    let result = {
        let mut ctx = CommandContext {
            config: &config,
            api,
            output: &mut output,
            commands: &infos,
        };
        cmd.run(&opts, &mut ctx)
    };

    (result, String::from_utf8(output).expect("utf-8 output"))
}

/// Output sink the tests can read after handing ownership to the shell
#[derive(Clone, Default)]
pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub enum RecorderBehavior {
    Succeed,
    Fail,
    Panic,
}

/// Command that records its invocations
pub struct Recorder {
    name: &'static str,
    behavior: RecorderBehavior,
    runs: Rc<Cell<usize>>,
    last_args: Rc<RefCell<Vec<String>>>,
    exit_code: ExitCode,
}

impl Recorder {
    pub fn new(name: &'static str) -> Self {
        Self::with_behavior(name, RecorderBehavior::Succeed)
    }

    pub fn with_behavior(name: &'static str, behavior: RecorderBehavior) -> Self {
        Self {
            name,
            behavior,
            runs: Rc::new(Cell::new(0)),
            last_args: Rc::new(RefCell::new(Vec::new())),
            exit_code: SUCCESS,
        }
    }

    pub fn runs(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.runs)
    }

    pub fn last_args(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.last_args)
    }
}

impl Command for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Records invocations"
    }

    fn run(&mut self, opts: &CommandOptions, _ctx: &mut CommandContext<'_>) -> CommandResult {
        self.runs.set(self.runs.get() + 1);
        *self.last_args.borrow_mut() = opts.args().to_vec();

        let result = match self.behavior {
            RecorderBehavior::Succeed => Ok(()),
            RecorderBehavior::Fail => Err(CommandError::Usage("recorder failed".to_string())),
            RecorderBehavior::Panic => {
                self.exit_code = -99;
                panic!("recorder panicked");
            }
        };
        self.exit_code = exit_code_for(&result);
        result
    }

    fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps records per test thread
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Installs the capturing logger and clears this thread's records
pub fn capture_logs() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages logged on this thread at `level` since `capture_logs`
pub fn logged(level: Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
