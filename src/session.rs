use std::io::{BufRead, Write};

use anyhow::Context;
use colored::Colorize;
use strum::IntoEnumIterator;

use crate::command::{self, Command};
use crate::context::AppContext;
use crate::render::{render_form, render_list};
use crate::roster::{self, Field, Submitted};

/// What the session shows after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Roster or form changed: status line, then form and list.
    Changed(String),
    Form,
    List,
    /// Nothing changed, tell the user why.
    Notice(String),
    /// Plain output, e.g. help text.
    Show(String),
    Quit,
}

fn missing_fields_notice(missing: &[Field]) -> String {
    let labels = missing.iter().map(Field::label).collect::<Vec<_>>();
    format!("All fields are required, missing: {}", labels.join(", "))
}

fn delete_teacher(ctx: &mut AppContext, id: roster::TeacherId) -> anyhow::Result<Outcome> {
    let Some(record) = ctx.roster.record(id) else {
        return Err(roster::Error::UnknownTeacher(id).into());
    };
    let identity = record.identify();

    if !ctx.prompter.confirm(&ctx.config.delete_prompt.0)? {
        log::debug!("Delete of {identity} declined");
        return Ok(Outcome::Notice(format!("Kept {identity}")));
    }

    let removed = ctx.roster.delete(id)?;
    Ok(Outcome::Changed(format!("Deleted {}", removed.identify())))
}

/// Apply one command to the context. Errors here are reported and the session continues.
pub fn apply(ctx: &mut AppContext, command: Command) -> anyhow::Result<Outcome> {
    let outcome = match command {
        Command::SetField(field, value) => {
            ctx.roster.set_field(field, value);
            Outcome::Form
        }
        Command::FillForm => {
            for field in Field::iter() {
                let value = ctx
                    .prompter
                    .input(field.label(), ctx.roster.draft().get(field))?;
                ctx.roster.set_field(field, value);
            }
            Outcome::Form
        }
        Command::Submit => {
            if !ctx.roster.draft().is_complete() {
                return Ok(Outcome::Notice(missing_fields_notice(
                    &ctx.roster.draft().missing_fields(),
                )));
            }
            match ctx.roster.submit() {
                Submitted::Created(id) => Outcome::Changed(format!("Added teacher #{id}")),
                Submitted::Updated(id) => Outcome::Changed(format!("Updated teacher #{id}")),
            }
        }
        Command::Edit(id) => {
            ctx.roster.begin_edit(id)?;
            Outcome::Changed(format!("Editing teacher #{id}"))
        }
        Command::Cancel => {
            ctx.roster.cancel_edit();
            Outcome::Changed("Form cleared".to_owned())
        }
        Command::Delete(id) => delete_teacher(ctx, id)?,
        Command::Search(term) => {
            ctx.roster.set_search_term(term);
            Outcome::List
        }
        Command::List => Outcome::List,
        Command::Json => Outcome::Show(
            serde_json::to_string_pretty(ctx.roster.records())
                .context("Serializing teachers to JSON")?,
        ),
        Command::Help => Outcome::Show(command::help_text()),
        Command::Quit => Outcome::Quit,
    };

    Ok(outcome)
}

fn write_outcome(ctx: &AppContext, outcome: Outcome, out: &mut impl Write) -> anyhow::Result<()> {
    match outcome {
        Outcome::Changed(status) => {
            writeln!(out, "{} {}", "✓".green(), status)?;
            write!(out, "{}", render_form(&ctx.roster))?;
            write!(out, "{}", render_list(&ctx.roster, &ctx.config))?;
        }
        Outcome::Form => write!(out, "{}", render_form(&ctx.roster))?,
        Outcome::List => write!(out, "{}", render_list(&ctx.roster, &ctx.config))?,
        Outcome::Notice(message) => writeln!(out, "{}", message.yellow())?,
        Outcome::Show(text) => writeln!(out, "{}", text.trim_end())?,
        Outcome::Quit => {}
    }
    Ok(())
}

fn report_error(out: &mut impl Write, err: &anyhow::Error) -> anyhow::Result<()> {
    log::debug!("Command failed: {err:?}");
    writeln!(out, "{}", format!("Error: {err:#}").red())?;
    Ok(())
}

/// Read commands line by line until `quit` or end of input.
///
/// With `echo_prompt` a `> ` prompt is written before each read.
pub fn run(
    ctx: &mut AppContext,
    mut input: impl BufRead,
    out: &mut impl Write,
    echo_prompt: bool,
) -> anyhow::Result<()> {
    log::info!("Session started");
    write!(out, "{}", render_form(&ctx.roster))?;
    write!(out, "{}", render_list(&ctx.roster, &ctx.config))?;
    writeln!(out, "Type 'help' for the list of commands.")?;

    let mut line = String::new();
    loop {
        if echo_prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line).context("Reading command")? == 0 {
            break;
        }

        let command = match command::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                report_error(out, &err)?;
                continue;
            }
        };

        log::debug!("Command: {command:?}");
        match apply(ctx, command) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => write_outcome(ctx, outcome, out)?,
            Err(err) => report_error(out, &err)?,
        }
    }

    log::info!("Session ended with {} teachers", ctx.roster.len());
    Ok(())
}
