use clap::Parser;
use log::LevelFilter;

fn main() {
    let cli = netprofile::cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();

    if let Err(err) = netprofile::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
