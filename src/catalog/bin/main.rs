use std::process::ExitCode;
use tracing::error;
use biblio::catalog::controller::run_demo;
use biblio::core::domain::Configuration;
use biblio::utils::logs::setup_tracing;

fn main() -> ExitCode {
    let config = Configuration::from_env();
    setup_tracing(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_demo(&mut out, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "catalog demo failed");
            ExitCode::FAILURE
        }
    }
}
