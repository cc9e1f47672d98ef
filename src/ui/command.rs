// ── Command parsing ───────────────────────────────────────────────────────────
//
// One command per input line:
//
//   char <text>        replace the character counter's text
//   msg <text>         replace the message (clamped to 100 characters)
//   clear char|msg     empty a field
//   copy char|msg      copy a field to the clipboard
//   theme              toggle light/dark
//   show               redraw
//   help               list commands
//   quit               exit
//
// Text after `char ` / `msg ` is taken verbatim, including trailing spaces.
// Escapes `\n`, `\t` and `\\` let a single line carry multi-line text.

use thiserror::Error;

use crate::app::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Edit(FieldId, String),
    Clear(FieldId),
    Copy(FieldId),
    ToggleTheme,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ParseError {
    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),
    #[error("unknown field {0:?}; expected `char` or `msg`")]
    UnknownField(String),
    #[error("`{0}` needs a field: `char` or `msg`")]
    MissingField(&'static str),
}

/// Parse one input line.  Blank lines yield `Ok(None)`.
pub(crate) fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let line = line.trim_start();
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, Some(rest)),
        None => (line.trim_end(), None),
    };

    let command = match verb {
        "char" => Command::Edit(FieldId::Chars, unescape(rest.unwrap_or(""))),
        "msg" => Command::Edit(FieldId::Message, unescape(rest.unwrap_or(""))),
        "clear" => Command::Clear(field(rest, "clear")?),
        "copy" => Command::Copy(field(rest, "copy")?),
        "theme" => Command::ToggleTheme,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_owned())),
    };
    Ok(Some(command))
}

fn field(arg: Option<&str>, verb: &'static str) -> Result<FieldId, ParseError> {
    match arg.map(str::trim) {
        None | Some("") => Err(ParseError::MissingField(verb)),
        Some("char") => Ok(FieldId::Chars),
        Some("msg") => Ok(FieldId::Message),
        Some(other) => Err(ParseError::UnknownField(other.to_owned())),
    }
}

/// Expand `\n`, `\t` and `\\`.  Any other backslash is kept as-is.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \r"), Ok(None));
    }

    #[test]
    fn edit_keeps_text_verbatim() {
        assert_eq!(
            parse("char  two spaces  "),
            Ok(Some(Command::Edit(FieldId::Chars, " two spaces  ".to_owned())))
        );
    }

    #[test]
    fn bare_edit_sets_empty_text() {
        assert_eq!(
            parse("msg"),
            Ok(Some(Command::Edit(FieldId::Message, String::new())))
        );
    }

    #[test]
    fn edit_unescapes() {
        assert_eq!(
            parse(r"char a\nb\tc\\d\q"),
            Ok(Some(Command::Edit(FieldId::Chars, "a\nb\tc\\d\\q".to_owned())))
        );
    }

    #[test]
    fn crlf_input_is_accepted() {
        assert_eq!(parse("theme\r"), Ok(Some(Command::ToggleTheme)));
        assert_eq!(
            parse("msg hi\r"),
            Ok(Some(Command::Edit(FieldId::Message, "hi".to_owned())))
        );
    }

    #[test]
    fn field_commands() {
        assert_eq!(parse("clear msg"), Ok(Some(Command::Clear(FieldId::Message))));
        assert_eq!(parse("copy char "), Ok(Some(Command::Copy(FieldId::Chars))));
        assert_eq!(parse("clear"), Err(ParseError::MissingField("clear")));
        assert_eq!(
            parse("copy body"),
            Err(ParseError::UnknownField("body".to_owned()))
        );
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("show"), Ok(Some(Command::Show)));
        assert_eq!(parse("?"), Ok(Some(Command::Help)));
        assert_eq!(parse("  exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = parse("paste char").expect_err("unknown");
        assert_eq!(err, ParseError::UnknownCommand("paste".to_owned()));
        assert!(err.to_string().contains("help"));
    }
}
