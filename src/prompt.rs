use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::Context;
use dialoguer::{Confirm, Input};

/// Blocking questions asked of the user in the middle of a command.
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool>;
    fn input(&mut self, label: &str, initial: &str) -> anyhow::Result<String>;
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .context("Reading confirmation from the terminal")
    }

    fn input(&mut self, label: &str, initial: &str) -> anyhow::Result<String> {
        Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Reading {label:?} from the terminal"))
    }
}

/// Answers yes to everything and keeps the current field values; for scripted runs.
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool> {
        log::info!("Assuming yes: {message}");
        Ok(true)
    }

    fn input(&mut self, _label: &str, initial: &str) -> anyhow::Result<String> {
        Ok(initial.to_owned())
    }
}

/// Replays canned answers in order.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub confirms: VecDeque<bool>,
    pub inputs: VecDeque<String>,
    /// Every confirmation message asked, in order. See [`ScriptedPrompter::asked_log`].
    pub asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirms(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(answers);
        self
    }

    pub fn with_inputs<S: Into<String>>(mut self, answers: impl IntoIterator<Item = S>) -> Self {
        self.inputs.extend(answers.into_iter().map(Into::into));
        self
    }

    pub fn asked_log(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.asked)
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool> {
        self.asked.borrow_mut().push(message.to_owned());
        self.confirms
            .pop_front()
            .with_context(|| format!("No scripted answer for {message:?}"))
    }

    fn input(&mut self, label: &str, _initial: &str) -> anyhow::Result<String> {
        self.inputs
            .pop_front()
            .with_context(|| format!("No scripted input for {label:?}"))
    }
}
