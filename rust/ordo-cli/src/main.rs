use std::process::ExitCode;

use clap::Parser;
use ordo_cli::{logging, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("\x1b[31merror\x1b[0m: {err}");
            ExitCode::FAILURE
        }
    }
}
