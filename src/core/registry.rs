use std::collections::HashMap;

use super::command::{Command, CommandInfo};
use crate::commands::{CurrentMatch, Help, RankedInfo, SummonerInfo, SummonerStats};

/// Name to handler mapping used for dispatch and for `help`
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn setup() -> Self {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(CurrentMatch::default()),
            Box::new(Help::default()),
            Box::new(SummonerInfo::default()),
            Box::new(SummonerStats::default()),
            Box::new(RankedInfo::default()),
        ];

        let mut registry = Self::empty();
        for cmd in commands {
            registry.register(cmd);
        }
        registry
    }

    /// Adds a command under its own name, replacing any earlier one
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name(), command);
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Command + 'static)> {
        self.commands.get_mut(name).map(|cmd| cmd.as_mut())
    }

    pub fn get_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn infos(&self) -> Vec<CommandInfo> {
        let mut infos: Vec<CommandInfo> = self.commands.values().map(|cmd| cmd.info()).collect();
        infos.sort_by_key(|info| info.name);
        infos
    }
}
