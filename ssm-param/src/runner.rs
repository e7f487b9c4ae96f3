use tracing::{debug, info};

use crate::{
    configs::{RunConfig, loaders::file},
    error::ParamError,
    parameter_store::{ParameterStore, SsmParameterStore, fetch},
    test_stub::test_param_value,
    transport::build_http_client,
};

/// Resolves the parameter value for one invocation.
pub async fn run(config: &RunConfig) -> Result<String, ParamError> {
    log_environment_name(&config.environment_file);

    if config.test_mode {
        info!("Test mode enabled, skipping AWS calls");
        return test_param_value(&config.parameter_name);
    }

    let http_client = build_http_client()?;
    let store = SsmParameterStore::connect(&config.region, http_client).await;
    run_with_store(config, &store).await
}

pub async fn run_with_store<S>(config: &RunConfig, store: &S) -> Result<String, ParamError>
where
    S: ParameterStore + ?Sized,
{
    info!(
        "Fetching parameter '{}' (region: '{}')",
        config.parameter_name, config.region
    );
    fetch(store, &config.parameter_name).await
}

fn log_environment_name(path: &str) {
    match file::load_trimmed(path) {
        Ok(environment) => debug!("Environment name from {}: {}", path, environment),
        Err(e) => debug!("No environment name available: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::RetrievalErrorKind,
        parameter_store::{ParameterOutput, tests::FakeStore},
    };

    fn config(parameter_name: &str, test_mode: bool) -> RunConfig {
        RunConfig {
            parameter_name: parameter_name.to_string(),
            region: "us-east-1".to_string(),
            test_mode,
            environment_file: "/nonexistent/environment".to_string(),
        }
    }

    #[tokio::test]
    async fn test_run_test_mode_sentinel() {
        let result = run(&config("TEST_PARAM_VALUE", true)).await.unwrap();
        assert_eq!(result, "TEST_PARAM_VALUE");
    }

    #[tokio::test]
    async fn test_run_test_mode_wrong_value() {
        let err = run(&config("wrong-value", true)).await.unwrap_err();
        assert!(matches!(err, ParamError::UnexpectedTestValue));
    }

    #[tokio::test]
    async fn test_run_test_mode_reads_environment_file() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(&temp_file, "production\n").unwrap();

        let mut config = config("TEST_PARAM_VALUE", true);
        config.environment_file = temp_file.path().to_str().unwrap().to_string();

        assert_eq!(run(&config).await.unwrap(), "TEST_PARAM_VALUE");
    }

    #[tokio::test]
    async fn test_run_with_store_success() {
        let store = FakeStore::default().with("/prod/api-key", ParameterOutput::new("k3y"));
        let result = run_with_store(&config("/prod/api-key", false), &store)
            .await
            .unwrap();
        assert_eq!(result, "k3y");
    }

    #[tokio::test]
    async fn test_run_with_store_not_found() {
        let store = FakeStore::default();
        let err = run_with_store(&config("/prod/missing", false), &store)
            .await
            .unwrap_err();
        assert_eq!(err.retrieval_kind(), Some(RetrievalErrorKind::NotFound));
        assert!(err.names_parameter());
    }

    #[tokio::test]
    async fn test_run_with_store_missing_value() {
        let store = FakeStore::default().with("/prod/blank", ParameterOutput::default());
        let err = run_with_store(&config("/prod/blank", false), &store)
            .await
            .unwrap_err();
        assert!(matches!(err, ParamError::MissingValue(_)));
    }
}
