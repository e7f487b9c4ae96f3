use clap::Parser;

use crate::error::{ArgumentCount, ParamError};

#[derive(Parser, Debug)]
#[command(version, about = "Fetch and decrypt a single AWS SSM parameter", long_about = None)]
pub struct Args {
    /// Skip AWS entirely and echo the argument back if it equals TEST_PARAM_VALUE
    #[arg(long)]
    pub test_mode: bool,

    /// Name of the parameter to fetch (e.g., /prod/db/password). Exactly one is supported.
    ///
    /// Flags are only recognised before it; everything after counts as a name.
    #[arg(value_name = "PARAMETER_NAME", trailing_var_arg = true)]
    pub params: Vec<String>,
}

/// Returns the only positional argument, rejecting zero or several.
pub fn parse_input(args: &[String]) -> Result<String, ParamError> {
    match args {
        [] => Err(ParamError::InvalidArgumentCount(ArgumentCount::None)),
        [param] => Ok(param.clone()),
        _ => Err(ParamError::InvalidArgumentCount(ArgumentCount::TooMany(
            args.len(),
        ))),
    }
}
