use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use target_sum_cli::app;
use target_sum_cli::args::Args;
use target_sum_cli::logging;
use target_sum_cli::options::Verbosity;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(
        args.logging.verbose,
        args.logging.quiet,
    ));

    match try_main(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    app::run(args, &mut stdout).context("target_sum failed")
}
