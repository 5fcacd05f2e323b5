use std::collections::{HashMap, HashSet};

/// Command arguments split into single-character flags and positional values
#[derive(Debug, Clone, Default)]
pub struct Flags {
    flags: HashSet<char>,
    values: HashMap<char, String>,
    positionals: Vec<String>,
}

/// Represents errors that can occur during flag parsing
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error("Invalid flag format: {0}")]
    InvalidFormat(String),
    #[error("Missing value for flag: -{0}")]
    MissingValue(char),
    #[error("Duplicate flag: -{0}")]
    DuplicateFlag(char),
    #[error("Unknown flag: -{0}")]
    UnknownFlag(char),
    #[error("Invalid value for flag -{0}: {1}")]
    InvalidValue(char, String),
}

impl Flags {
    /// Parses arguments, accepting only the listed flags
    ///
    /// # Arguments
    /// * `args` - Argument tokens following the command name
    /// * `switches` - Flags that take no value
    /// * `value_flags` - Flags that consume the next token as their value
    pub fn parse(
        args: &[String],
        switches: &[char],
        value_flags: &[char],
    ) -> Result<Self, FlagError> {
        let mut flags = HashSet::new();
        let mut values = HashMap::new();
        let mut positionals = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();

            match arg.strip_prefix('-') {
                Some("") => return Err(FlagError::InvalidFormat("Empty flag".to_string())),
                Some(flag_chars) => {
                    for c in flag_chars.chars() {
                        if flags.contains(&c) {
                            return Err(FlagError::DuplicateFlag(c));
                        }

                        if value_flags.contains(&c) {
                            i += 1;
                            let value = args.get(i).ok_or(FlagError::MissingValue(c))?;
                            values.insert(c, value.clone());
                        } else if !switches.contains(&c) {
                            return Err(FlagError::UnknownFlag(c));
                        }
                        flags.insert(c);
                    }
                }
                None => positionals.push(arg.to_string()),
            }
            i += 1;
        }

        Ok(Self {
            flags,
            values,
            positionals,
        })
    }

    /// Checks if a flag is present
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }

    /// Gets the value associated with a flag
    pub fn get_value(&self, flag: char) -> Option<&str> {
        self.values.get(&flag).map(String::as_str)
    }

    /// Parses the value of a flag, falling back to `default` when absent
    pub fn parse_value<T: std::str::FromStr>(&self, flag: char, default: T) -> Result<T, FlagError> {
        match self.get_value(flag) {
            Some(raw) => raw
                .parse()
                .map_err(|_| FlagError::InvalidValue(flag, raw.to_string())),
            None => Ok(default),
        }
    }

    /// Non-flag arguments in input order, empty tokens included
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}
