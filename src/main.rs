use std::io::BufReader;

use anyhow::Context;
use clap::Parser;

use roster::cli::Args;
use roster::config::AppConfig;
use roster::context::AppContext;
use roster::prompt::{AssumeYes, Prompter, TerminalPrompter};
use roster::session;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = match args.config {
        Some(ref file_path) => AppConfig::try_read(file_path)?,
        None => AppConfig::default(),
    };

    let prompter: Box<dyn Prompter> = if args.assume_yes || config.assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalPrompter)
    };

    let mut ctx = AppContext::new(config, prompter);
    let mut stdout = std::io::stdout();

    match args.script {
        Some(ref script_path) => {
            let file = std::fs::File::open(script_path)
                .with_context(|| format!("Opening script file {script_path:?}"))?;
            session::run(&mut ctx, BufReader::new(file), &mut stdout, false)?;
        }
        // not locked: the prompter reads from the terminal between commands
        None => session::run(&mut ctx, BufReader::new(std::io::stdin()), &mut stdout, true)?,
    }

    Ok(())
}
