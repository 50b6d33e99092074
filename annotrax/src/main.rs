// src/main.rs
use annotrax::{Args, init_tracing, normalize_args, run};
use clap::Parser;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse_from(normalize_args(env::args_os()));
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
