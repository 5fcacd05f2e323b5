/// One parsed input line: the command name and its argument tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptions {
    command_name: String,
    args: Vec<String>,
}

impl CommandOptions {
    /// Splits a raw line into a command name and arguments.
    ///
    /// Returns `None` when the line holds no tokens. Arguments are split on
    /// single spaces, so a run of spaces yields empty tokens.
    pub fn parse(input: &str) -> Option<Self> {
        let line = input.trim();
        if line.is_empty() {
            return None;
        }

        let mut parts = line.split(' ');
        let command_name = parts.next()?.to_string();
        let args = parts.map(str::to_string).collect();

        Some(Self { command_name, args })
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
