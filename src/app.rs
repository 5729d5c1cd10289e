use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        json,
        base_path,
        config,
        command,
        ..
    } = cli;

    let ctx = AppContext::bootstrap(json, base_path.as_deref(), config.as_deref())?;

    match command {
        Command::List => commands::list::run(&ctx),
        Command::Get(args) => commands::get::run(&ctx, args),
        Command::Find(args) => commands::find::run(&ctx, args),
    }
}
