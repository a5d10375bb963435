//! Tokenizing user input into a command and its arguments.

/// The command vocabulary. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Search,
    Help,
    /// `close` or `exit`
    Exit,
    /// Anything else, including an empty line
    Unknown,
}

impl From<&str> for Command {
    fn from(token: &str) -> Self {
        match token {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add_birthday" => Command::AddBirthday,
            "show_birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "remove_phone" => Command::RemovePhone,
            "search" => Command::Search,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

/// A command plus the whitespace-separated arguments that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line on whitespace: the first token is the command, the rest are
/// arguments. There is no quoting.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().map_or(Command::Unknown, Command::from);
    let args = tokens.map(str::to_string).collect();

    ParsedInput { command, args }
}
