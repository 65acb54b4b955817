use std::process::ExitCode;
use clap::Parser;
use tracing::error;
use biblio::core::command::Command;
use biblio::core::domain::Configuration;
use biblio::core::library::OutputFormat;
use biblio::factorial::command::compute_factorial_cmd::{ComputeFactorialCommand, ComputeFactorialCommandRequest};
use biblio::utils::logs::setup_tracing;

#[derive(Parser, Debug)]
#[command(name = "factorial", about = "Prints n! for a non-negative integer n")]
struct Cli {
    /// The number whose factorial is printed
    #[arg(allow_negative_numbers = true)]
    n: i64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Configuration::from_env();
    setup_tracing(&config);

    let res = match ComputeFactorialCommand::new().execute(ComputeFactorialCommandRequest::new(cli.n)) {
        Ok(res) => res,
        Err(err) => {
            error!(n = cli.n, error = %err, "factorial failed");
            return ExitCode::FAILURE;
        }
    };
    match config.output_format {
        OutputFormat::Text => println!("{}! = {}", res.n, res.value),
        OutputFormat::Json => match serde_json::to_string(&res) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!(error = %err, "could not serialize factorial");
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
