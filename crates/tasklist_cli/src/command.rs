//! Line command parsing for the terminal front end.

pub const HELP: &str = "commands:
  add <text>   add a task (bare text works too)
  rm <id>      remove by id
  rm #<n>      remove the n-th listed task
  ls           show the list
  quit         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    RemoveId(String),
    /// 1-based position as printed by `ls`.
    RemoveAt(usize),
    List,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parses one input line. Unknown words are treated as task text.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "add" => Command::Add(rest.to_string()),
        "rm" | "remove" => parse_remove_target(rest),
        "ls" | "list" if rest.is_empty() => Command::List,
        "help" | "?" if rest.is_empty() => Command::Help,
        "quit" | "exit" if rest.is_empty() => Command::Quit,
        _ => Command::Add(line.to_string()),
    }
}

fn parse_remove_target(target: &str) -> Command {
    if target.is_empty() {
        return Command::Invalid("rm needs an id or #position".to_string());
    }
    match target.strip_prefix('#') {
        Some(position) => match position.parse::<usize>() {
            Ok(position) if position > 0 => Command::RemoveAt(position),
            _ => Command::Invalid(format!("invalid position `{target}`")),
        },
        None => Command::RemoveId(target.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};

    #[test]
    fn bare_text_is_added() {
        assert_eq!(
            parse_command("  Walk the dog "),
            Command::Add("Walk the dog".to_string())
        );
    }

    #[test]
    fn add_keeps_text_after_keyword() {
        assert_eq!(
            parse_command("add 牛乳を買う"),
            Command::Add("牛乳を買う".to_string())
        );
        assert_eq!(parse_command("add"), Command::Add(String::new()));
    }

    #[test]
    fn remove_accepts_id_or_position() {
        assert_eq!(
            parse_command("rm 1700000000000-2"),
            Command::RemoveId("1700000000000-2".to_string())
        );
        assert_eq!(parse_command("remove #3"), Command::RemoveAt(3));
    }

    #[test]
    fn remove_rejects_bad_targets() {
        assert!(matches!(parse_command("rm"), Command::Invalid(_)));
        assert!(matches!(parse_command("rm #0"), Command::Invalid(_)));
        assert!(matches!(parse_command("rm #x"), Command::Invalid(_)));
    }

    #[test]
    fn keywords_with_trailing_text_are_tasks() {
        assert_eq!(parse_command("ls"), Command::List);
        assert_eq!(
            parse_command("list groceries"),
            Command::Add("list groceries".to_string())
        );
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("   "), Command::Empty);
    }
}
