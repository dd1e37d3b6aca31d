#![forbid(unsafe_code)]

use cnm_chart::{ChartSink, CsvSink, JsonSink};
use cnm_compare::derivative_figure;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
derivative_compare: render the finite-difference comparison figure

USAGE:
    derivative_compare [--out-dir <dir>] [--step <h>] [--json]

OPTIONS:
    --out-dir <dir>   artifact directory (default: artifacts/derivative)
    --step <h>        finite-difference step size (default: 0.5)
    --json            also write the whole figure as one JSON artifact
    -h, --help        print this help";

#[derive(Debug, Clone)]
struct CliArgs {
    out_dir: PathBuf,
    step: f64,
    json: bool,
}

#[derive(Debug, Clone)]
enum CliParseError {
    Help,
    Message(String),
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, CliParseError> {
    let mut out_dir = PathBuf::from("artifacts/derivative");
    let mut step = 0.5;
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
            "--json" => {
                json = true;
                index += 1;
            }
            other => return Err(CliParseError::Message(format!("unknown argument: {other}"))),
        }
    }

    Ok(CliArgs { out_dir, step, json })
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
            eprintln!("derivative_compare: {message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let figure = derivative_figure(args.step);

    let mut csv = CsvSink::new(&args.out_dir);
    if let Err(err) = csv.render(&figure) {
        eprintln!("derivative_compare: {err}");
        return ExitCode::FAILURE;
    }
    if args.json {
        let mut json = JsonSink::new(&args.out_dir);
        if let Err(err) = json.render(&figure) {
            eprintln!("derivative_compare: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!(
        "wrote {} series ({} points each, h = {}) to {}",
        figure.series.len(),
        figure.series[0].x.len(),
        args.step,
        args.out_dir.display()
    );
    ExitCode::SUCCESS
}
