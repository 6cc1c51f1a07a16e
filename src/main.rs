mod boundary;
mod cli;
mod config;
mod contrib;
mod git;
mod logging;
mod measure;
mod org;
mod ratio;
mod report;

use clap::Parser;

use crate::cli::Args;
use crate::config::RunConfig;

fn main() {
    logging::init();

    let args = Args::parse();
    let config = RunConfig::from_args(args);
    if let Err(err) = measure::run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
