use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use ssm_param::{ParamError, RunConfig, cli::Args, run};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn setup_logging() {
    // stdout carries the parameter value only
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(), // reads RUST_LOG
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

fn report(param_name: &str, err: &ParamError) {
    if let Some(kind) = err.retrieval_kind() {
        debug!("Retrieval failed, kind: {}", kind);
    }
    if err.names_parameter() {
        error!(
            "There was an error fetching/decrypting the parameter: {}",
            param_name
        );
    }
    error!("{}", err);
}

fn print_value(value: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", value)?;
    stdout.flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version land here too
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match RunConfig::load(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(value) => match print_value(&value) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Failed to write parameter value to stdout: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            report(&config.parameter_name, &err);
            ExitCode::FAILURE
        }
    }
}
