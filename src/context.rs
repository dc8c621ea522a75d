use crate::{config::AppConfig, prompt::Prompter, roster::Roster};

pub struct AppContext {
    pub config: AppConfig,
    pub roster: Roster,
    pub prompter: Box<dyn Prompter>,
}

impl AppContext {
    pub fn new(config: AppConfig, prompter: Box<dyn Prompter>) -> AppContext {
        AppContext {
            config,
            roster: Roster::new(),
            prompter,
        }
    }
}
