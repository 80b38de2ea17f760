use diceware::cli::{parse_cli, run};
use diceware::config::Config;
use diceware::logging::init_logging;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let config = Config::load(cli.wordlists_dir.clone());
    let wordlists = config.wordlists();
    let mut stdout = io::stdout().lock();

    match run(&cli.command, &wordlists, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
