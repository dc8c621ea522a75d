use anyhow::{bail, Context};
use strum::IntoEnumIterator;

use crate::roster::{Field, TeacherId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetField(Field, String),
    FillForm,
    Submit,
    Edit(TeacherId),
    Cancel,
    Delete(TeacherId),
    Search(String),
    List,
    Json,
    Help,
    Quit,
}

pub fn help_text() -> String {
    let fields = Field::iter().map(|f| f.name()).collect::<Vec<_>>().join(", ");
    format!(
        r#"Available commands:
 - set <field> <value>: set one form field. Fields: {fields}.
 - f | form: fill in every form field in turn.
 - s | submit: add the teacher in the form, or update the one being edited. All fields are required.
 - e | edit <id>: load a teacher into the form for editing.
 - c | cancel: stop editing and clear the form.
 - d | delete <id>: delete a teacher, after confirmation.
 - / | search [<text>]: show only teachers whose second last name contains the text. No text shows everyone.
 - l | list: show the teacher list.
 - json: print every teacher as JSON.
 - h | help: show this help message.
 - q | quit: exit. Nothing is saved.
"#
    )
}

fn parse_id(arg: &str) -> anyhow::Result<TeacherId> {
    let arg = arg.trim();
    if arg.is_empty() {
        bail!("Expected a teacher ID");
    }
    arg.parse::<u64>()
        .map(TeacherId)
        .with_context(|| format!("Invalid teacher ID {arg:?}"))
}

/// Parse one input line. Returns `None` for blank lines.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }

    // everything after the first whitespace character following the verb is the
    // argument; only the search text keeps its leading whitespace
    let line = line.trim_end_matches(['\n', '\r']);
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    let command = match verb {
        "set" => {
            let rest = rest.trim_start();
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = field
                .parse::<Field>()
                .with_context(|| format!("Unknown field {field:?}"))?;
            Command::SetField(field, value.trim_start().to_owned())
        }
        "f" | "form" => Command::FillForm,
        "s" | "submit" => Command::Submit,
        "e" | "edit" => Command::Edit(parse_id(rest)?),
        "c" | "cancel" => Command::Cancel,
        "d" | "delete" => Command::Delete(parse_id(rest)?),
        "/" | "search" => Command::Search(rest.to_owned()),
        "l" | "list" => Command::List,
        "json" => Command::Json,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        unknown => bail!("Unrecognized command {unknown}"),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \n").unwrap(), None);
    }

    #[test]
    fn set_keeps_the_rest_of_the_line() {
        assert_eq!(
            parse("set first-name Ana Maria\n"),
            Command::SetField(Field::FirstName, "Ana Maria".into())
        );
        assert_eq!(
            parse("set email"),
            Command::SetField(Field::Email, String::new())
        );
        assert!(parse_line("set nickname Bob").is_err());
    }

    #[test]
    fn ids_must_be_numbers() {
        assert_eq!(parse("edit 3"), Command::Edit(TeacherId(3)));
        assert_eq!(parse("d 12"), Command::Delete(TeacherId(12)));
        assert!(parse_line("delete").is_err());
        assert!(parse_line("edit three").is_err());
    }

    #[test]
    fn search_text_is_verbatim() {
        assert_eq!(parse("search"), Command::Search(String::new()));
        assert_eq!(parse("/ ia"), Command::Search("ia".into()));
        assert_eq!(
            parse("search  Garcia \r\n"),
            Command::Search(" Garcia ".into())
        );
    }

    #[test]
    fn extra_whitespace_between_words() {
        assert_eq!(
            parse("set  first-name Ana"),
            Command::SetField(Field::FirstName, "Ana".into())
        );
        assert_eq!(
            parse("set\tlast-name\t Ruiz"),
            Command::SetField(Field::LastName, "Ruiz".into())
        );
        assert_eq!(parse("edit\t3"), Command::Edit(TeacherId(3)));
        assert_eq!(parse("delete   4"), Command::Delete(TeacherId(4)));
        assert_eq!(parse("search\tia"), Command::Search("ia".into()));
    }

    #[test]
    fn help_lists_field_names() {
        let help = help_text();
        assert!(help.contains("Fields: first-name, last-name, second-last-name, email, subject."));
    }

    #[test]
    fn aliases() {
        assert_eq!(parse("s"), Command::Submit);
        assert_eq!(parse("c"), Command::Cancel);
        assert_eq!(parse("q"), Command::Quit);
        assert_eq!(parse("?"), Command::Help);
        assert!(parse_line("frobnicate").is_err());
    }
}
