use inquire::autocompletion::{Autocomplete, Replacement};

// Built-in commands: (command, description)
pub const COMMANDS: &[(&str, &str)] = &[
    ("exit", "Quit mygpt"),
    ("help", "Show available commands"),
    ("models", "List installed Ollama models"),
    ("setmodel", "Switch model: setmodel <name>"),
    ("testmodel", "Run a speed test on the current model"),
];

/// Built-in command autocompleter
#[derive(Clone, Default)]
pub struct CommandCompleter;

impl Autocomplete for CommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        let input = input.to_lowercase();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(&input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Built-in commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Models,
    /// `setmodel` with the requested name, if one was given.
    SetModel(Option<String>),
    TestModel,
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Prompt(String),
    Command(Command),
    Empty,
}

/// Classifies a line typed at the prompt.
///
/// Command words match case-insensitively; a `setmodel` argument keeps its case.
pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    match input.to_lowercase().as_str() {
        "exit" => return Input::Command(Command::Exit),
        "help" => return Input::Command(Command::Help),
        "models" => return Input::Command(Command::Models),
        "testmodel" => return Input::Command(Command::TestModel),
        "setmodel" => return Input::Command(Command::SetModel(None)),
        _ => {}
    }

    parse_setmodel(input).map_or_else(|| Input::Prompt(input.to_string()), Input::Command)
}

fn parse_setmodel(input: &str) -> Option<Command> {
    const KEYWORD: &str = "setmodel";

    let keyword = input.get(..KEYWORD.len())?;
    let rest = &input[KEYWORD.len()..];
    if !keyword.eq_ignore_ascii_case(KEYWORD) || !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let name = rest.trim();
    Some(Command::SetModel(
        (!name.is_empty()).then(|| name.to_string()),
    ))
}
