#![forbid(unsafe_code)]

use cnm_compare::quadrature_report;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
quadrature_compare: evaluate every quadrature rule for the parabola test integral

USAGE:
    quadrature_compare [--lower <a>] [--upper <b>] [--steps <n>] [--json-out <dir>]

OPTIONS:
    --lower <a>       lower integration bound (default: 0)
    --upper <b>       upper integration bound (default: 5)
    --steps <n>       partition count (default: 10)
    --json-out <dir>  also write the report as a JSON artifact
    -h, --help        print this help";

#[derive(Debug, Clone)]
struct CliArgs {
    lower: f64,
    upper: f64,
    steps: usize,
    json_out: Option<PathBuf>,
}

#[derive(Debug, Clone)]
enum CliParseError {
    Help,
    Message(String),
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, CliParseError> {
    let mut lower = 0.0;
    let mut upper = 5.0;
    let mut steps = 10;
    let mut json_out = None;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => return Err(CliParseError::Help),
            "--lower" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --lower",
                    )));
                };
                lower = value
                    .parse()
                    .map_err(|_| CliParseError::Message(format!("invalid value for --lower: {value}")))?;
                index += 2;
            }
            "--upper" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --upper",
                    )));
                };
                upper = value
                    .parse()
                    .map_err(|_| CliParseError::Message(format!("invalid value for --upper: {value}")))?;
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
            "--json-out" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --json-out",
                    )));
                };
                json_out = Some(PathBuf::from(value));
                index += 2;
            }
            other => return Err(CliParseError::Message(format!("unknown argument: {other}"))),
        }
    }

    Ok(CliArgs {
        lower,
        upper,
        steps,
        json_out,
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
            eprintln!("quadrature_compare: {message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let report = quadrature_report(args.lower, args.upper, args.steps);
    println!("{report}");

    if let Some(dir) = args.json_out {
        let simpson = match &report.simpson {
            Ok(value) => serde_json::json!(value),
            Err(err) => serde_json::json!({ "error": err.to_string() }),
        };
        let artifact = serde_json::json!({
            "a": report.a,
            "b": report.b,
            "n": report.n,
            "midpoint": report.midpoint,
            "trapezoid": report.trapezoid,
            "simpson": simpson,
        });
        let path = dir.join("quadrature_report.json");
        let write = std::fs::create_dir_all(&dir)
            .and_then(|()| std::fs::write(&path, artifact.to_string()));
        if let Err(err) = write {
            eprintln!("quadrature_compare: failed to write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
        println!("wrote report to {}", path.display());
    }

    ExitCode::SUCCESS
}
