extern crate loopbench;

use std::env;
use std::process;

use loopbench::{RunError, RunOptions};
use tracing_subscriber::EnvFilter;

struct Args {
    options: RunOptions,
    json: bool
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, RunError> {
    args.next().ok_or_else(|| RunError::InvalidArgument(format!("{} expects a value", flag)))
}

fn number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, RunError> {
    raw.trim().parse().map_err(|_| RunError::InvalidArgument(format!("{} {}", flag, raw)))
}

// Flags apply on top of `--config` wherever it appears.
fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args, RunError> {
    let mut config = None;
    let mut flags = Vec::new();
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--config" => config = Some(value(&mut args, &arg)?),
            "--include" | "--sizes" | "--warmup" | "--iterations" | "--time" => {
                let raw = value(&mut args, &arg)?;
                flags.push((arg.clone(), raw));
            },
            "--json" => json = true,
            other => return Err(RunError::InvalidArgument(other.to_string()))
        }
    }

    let mut options = match config {
        Some(path) => RunOptions::from_json_file(path)?,
        None => RunOptions::default()
    };
    for (flag, raw) in flags {
        apply_flag(&mut options, &flag, &raw)?;
    }

    options.validate()?;
    Ok(Args { options, json })
}

fn apply_flag(options: &mut RunOptions, flag: &str, raw: &str) -> Result<(), RunError> {
    match flag {
        "--include" => options.include = raw.to_string(),
        "--sizes" => {
            options.sizes = raw.split(',')
                .map(|s| number(s, flag))
                .collect::<Result<Vec<usize>, RunError>>()?;
        },
        "--warmup" => options.warmup_iterations = number(raw, flag)?,
        "--iterations" => options.measurement_iterations = number(raw, flag)?,
        "--time" => options.iteration_time_ms = number(raw, flag)?,
        other => return Err(RunError::InvalidArgument(other.to_string()))
    }
    Ok(())
}

fn run(args: Args) -> Result<(), RunError> {
    let report = loopbench::run(&args.options)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args(env::args().skip(1)).and_then(run);
    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}
