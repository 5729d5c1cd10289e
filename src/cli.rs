use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "netprofile",
    version,
    about = "Look up Windows network profiles"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Registry path holding profile keys")]
    pub base_path: Option<String>,
    #[arg(long, global = true, help = "Read settings from this file")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List,
    Get(GetArgs),
    Find(FindArgs),
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(help = "Profile GUID, with or without braces")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    #[arg(help = "Profile name")]
    pub name: String,
}
