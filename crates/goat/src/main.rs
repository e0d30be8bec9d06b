use std::process::ExitCode;

use clap::Parser;
use goat::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {:?}", err);
            eprintln!("goat: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &Args) {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("GOAT_LOG", args.log_level()))
        .init();
}
