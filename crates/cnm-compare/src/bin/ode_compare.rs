#![forbid(unsafe_code)]

use cnm_chart::{ChartSink, CsvSink, JsonSink};
use cnm_compare::{rk_figure, trajectory_mae};
use cnm_ode::{RkOrder, harmonic_oscillator, integrate};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
ode_compare: integrate the harmonic oscillator with every RK scheme

USAGE:
    ode_compare [--out-dir <dir>] [--step <h>] [--steps <n>] [--json]

OPTIONS:
    --out-dir <dir>   artifact directory (default: artifacts/ode)
    --step <h>        step size (default: 0.1)
    --steps <n>       number of steps (default: 100)
    --json            also write the whole figure as one JSON artifact
    -h, --help        print this help";

#[derive(Debug, Clone)]
struct CliArgs {
    out_dir: PathBuf,
    step: f64,
    steps: usize,
    json: bool,
}

#[derive(Debug, Clone)]
enum CliParseError {
    Help,
    Message(String),
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, CliParseError> {
    let mut out_dir = PathBuf::from("artifacts/ode");
    let mut step = 0.1;
    let mut steps = 100;
    let mut json = false;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => return Err(CliParseError::Help),
            "--out-dir" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --out-dir",
                    )));
                };
                out_dir = PathBuf::from(value);
                index += 2;
            }
            "--step" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --step",
                    )));
                };
                step = value
                    .parse()
                    .map_err(|_| CliParseError::Message(format!("invalid value for --step: {value}")))?;
                index += 2;
            }
            "--steps" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --steps",
                    )));
                };
                steps = value
                    .parse()
                    .map_err(|_| CliParseError::Message(format!("invalid value for --steps: {value}")))?;
                index += 2;
            }
            "--json" => {
                json = true;
                index += 1;
            }
            other => return Err(CliParseError::Message(format!("unknown argument: {other}"))),
        }
    }

    Ok(CliArgs {
        out_dir,
        step,
        steps,
        json,
    })
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_cli_args(&raw) {
        Ok(args) => args,
        Err(CliParseError::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(CliParseError::Message(message)) => {
            eprintln!("ode_compare: {message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let figure = rk_figure(0.0, args.step, args.steps);

    let mut csv = CsvSink::new(&args.out_dir);
    if let Err(err) = csv.render(&figure) {
        eprintln!("ode_compare: {err}");
        return ExitCode::FAILURE;
    }
    if args.json {
        let mut json = JsonSink::new(&args.out_dir);
        if let Err(err) = json.render(&figure) {
            eprintln!("ode_compare: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!(
        "wrote {} series ({} samples each) to {}",
        figure.series.len(),
        args.steps,
        args.out_dir.display()
    );
    for order in RkOrder::ALL {
        let trajectory = integrate(
            order,
            &mut harmonic_oscillator,
            &[1.0, 0.0],
            0.0,
            args.step,
            args.steps,
        );
        let mae = trajectory_mae(&trajectory, f64::cos);
        println!("{}: mean abs error vs cos(t) = {mae:.3e}", order.label());
    }
    ExitCode::SUCCESS
}
