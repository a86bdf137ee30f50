/// A chat line that starts with the command prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased invocation keyword.
    pub keyword: String,
    pub args: Vec<String>,
    /// Everything after the keyword, trimmed.
    pub text: String,
}

/// Splits `<prefix><keyword> <rest>`; `None` when the line is not a command.
pub fn parse_command(prefix: &str, line: &str) -> Option<ParsedCommand> {
    let body = line.trim().strip_prefix(prefix)?;
    if body.starts_with(char::is_whitespace) {
        return None;
    }

    let (keyword, rest) = match body.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (body, ""),
    };

    if keyword.is_empty() {
        return None;
    }

    Some(ParsedCommand {
        keyword: keyword.to_lowercase(),
        args: rest.split_whitespace().map(str::to_string).collect(),
        text: rest.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_and_args() {
        let parsed = parse_command(".", ".Letter hello   world").unwrap();
        assert_eq!(parsed.keyword, "letter");
        assert_eq!(parsed.args, vec!["hello", "world"]);
        assert_eq!(parsed.text, "hello   world");
    }

    #[test]
    fn test_bare_keyword() {
        let parsed = parse_command("!", "  !menu  ").unwrap();
        assert_eq!(parsed.keyword, "menu");
        assert!(parsed.args.is_empty());
        assert_eq!(parsed.text, "");
    }

    #[test]
    fn test_not_a_command() {
        assert!(parse_command(".", "menu").is_none());
        assert!(parse_command(".", ".").is_none());
        assert!(parse_command(".", ". menu").is_none());
        assert!(parse_command(".", "").is_none());
    }

    #[test]
    fn test_multichar_prefix() {
        let parsed = parse_command("#!", "#!sys").unwrap();
        assert_eq!(parsed.keyword, "sys");
    }
}
