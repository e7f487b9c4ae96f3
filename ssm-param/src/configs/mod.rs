pub mod loaders;

use tracing::debug;

use crate::{cli::Args, cli::parse_input, error::ParamError};
use loaders::environment;

pub const REGION_ENV: &str = "AWS_REGION";
pub const ENVIRONMENT_FILE_PATH: &str = "/opt/environment";

/// Everything a single invocation needs, resolved up front so nothing
/// below `main` reads process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub parameter_name: String,
    /// Empty means the SDK's default region chain decides.
    pub region: String,
    pub test_mode: bool,
    pub environment_file: String,
}

impl RunConfig {
    pub fn load(args: &Args) -> Result<Self, ParamError> {
        let parameter_name = parse_input(&args.params)?;

        Ok(RunConfig {
            parameter_name,
            region: environment::load(REGION_ENV).unwrap_or_else(|e| {
                debug!("{}, leaving region to the SDK", e);
                String::new()
            }),
            test_mode: args.test_mode,
            environment_file: ENVIRONMENT_FILE_PATH.to_string(),
        })
    }
}
