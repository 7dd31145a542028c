// crates/cli/src/app.rs
use crate::args::Args;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::presentation;
use std::io::Write;
use std::process::ExitCode;
use target_sum_engine::Problem;
use target_sum_engine::input;

/// Problems named on the command line: a batch file, or the positional numbers.
///
/// # Errors
/// Returns an error if the batch file cannot be read or parsed, or if no
/// target was given for the positional numbers.
pub fn load_problems(args: &Args) -> Result<Vec<Problem>> {
    if let Some(path) = &args.input {
        return Ok(input::load(path)?);
    }
    let target = args.target.ok_or(AppError::MissingTarget)?;
    Ok(vec![Problem::new(args.numbers.clone(), target)])
}

/// Solve everything the arguments describe and render it to `out`.
///
/// Per-problem failures are reported on stderr and turn the exit code into
/// a failure without suppressing the outcomes that did succeed.
///
/// # Errors
/// Returns an error for invalid options, unreadable input, strict-mode
/// failures and output errors.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<ExitCode> {
    let config = Config::try_from(args)?;
    let problems = load_problems(args)?;
    let result = target_sum_engine::run(&config, &problems)?;

    for (index, err) in &result.errors {
        eprintln!("Error in problem #{} ({}): {err}", index + 1, problems[*index]);
    }

    presentation::render(out, &result, &args.output)?;
    out.flush()?;

    Ok(if result.errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
