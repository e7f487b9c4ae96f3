use std::env::{self, VarError};

/// Reads `env_name`, telling "unset" apart from "not unicode".
pub fn load(env_name: &str) -> Result<String, String> {
    match env::var(env_name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Err(format!("Environment variable '{env_name}' is not set")),
        Err(VarError::NotUnicode(_)) => Err(format!(
            "Environment variable '{env_name}' is not valid unicode"
        )),
    }
}
