use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

pub struct CommandCompleter {
    commands: Vec<String>,
}

impl CommandCompleter {
    pub fn new(commands: Vec<&'static str>) -> Self {
        Self {
            commands: commands.into_iter().map(String::from).collect(),
        }
    }

    fn candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.commands.iter().filter(move |cmd| cmd.starts_with(word))
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let word = &line[..pos];

        // Only the command name is completed; arguments are player names
        if word.contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let mut matches: Vec<Pair> = self
            .candidates(word)
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        matches.sort_by(|a, b| a.display.cmp(&b.display));

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if line.is_empty() || pos < line.len() || line.contains(' ') {
            return None;
        }

        let mut candidates = self.candidates(line);
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Some(only[line.len()..].to_string()),
            _ => None,
        }
    }
}

impl Validator for CommandCompleter {}

impl Highlighter for CommandCompleter {}

impl Helper for CommandCompleter {}
