mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use nukr_common::error;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = commands.to_config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands::run::run(&cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
