use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ssm::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::get_parameter::{GetParameterError, GetParameterOutput},
};
use aws_smithy_runtime_api::client::http::SharedHttpClient;
use aws_types::region::Region;
use tracing::debug;

use crate::error::{ParamError, RetrievalErrorKind};

/// The one field of a GetParameter response this tool cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterOutput {
    pub value: Option<String>,
}

impl ParameterOutput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn into_value(self, param_name: &str) -> Result<String, ParamError> {
        self.value
            .ok_or_else(|| ParamError::MissingValue(param_name.to_string()))
    }
}

impl From<GetParameterOutput> for ParameterOutput {
    fn from(output: GetParameterOutput) -> Self {
        Self {
            value: output.parameter.and_then(|p| p.value),
        }
    }
}

#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetches `param_name`, decrypted server side.
    async fn get_parameter(&self, param_name: &str) -> Result<ParameterOutput, ParamError>;
}

pub async fn fetch<S>(store: &S, param_name: &str) -> Result<String, ParamError>
where
    S: ParameterStore + ?Sized,
{
    store.get_parameter(param_name).await?.into_value(param_name)
}

/// SDK session for `region`, or for the default region chain when empty.
pub async fn load_sdk_config(region: &str, http_client: SharedHttpClient) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::v2025_08_07()).http_client(http_client);
    if !region.is_empty() {
        loader = loader.region(Region::new(region.to_string()));
    }
    let config = loader.load().await;
    debug!("SSM session opened, region: {:?}", config.region());
    config
}

pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(region: &str, http_client: SharedHttpClient) -> Self {
        let config = load_sdk_config(region, http_client).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, param_name: &str) -> Result<ParameterOutput, ParamError> {
        let output = self
            .client
            .get_parameter()
            .name(param_name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| retrieval_failure(&e))?;

        Ok(output.into())
    }
}

fn retrieval_failure(err: &SdkError<GetParameterError>) -> ParamError {
    ParamError::RetrievalFailure {
        kind: classify(err),
        message: DisplayErrorContext(err).to_string(),
    }
}

fn classify(err: &SdkError<GetParameterError>) -> RetrievalErrorKind {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) | SdkError::ResponseError(_) => {
            RetrievalErrorKind::Transport
        }
        SdkError::ServiceError(service_err) => {
            let e = service_err.err();
            if e.is_parameter_not_found() || e.is_parameter_version_not_found() {
                RetrievalErrorKind::NotFound
            } else {
                kind_from_code(e.code())
            }
        }
        _ => RetrievalErrorKind::Other,
    }
}

/// Maps an AWS error code onto a failure category.
pub fn kind_from_code(code: Option<&str>) -> RetrievalErrorKind {
    match code {
        Some("ParameterNotFound" | "ParameterVersionNotFound") => RetrievalErrorKind::NotFound,
        Some(
            "AccessDeniedException"
            | "UnrecognizedClientException"
            | "ExpiredTokenException"
            | "InvalidSignatureException",
        ) => RetrievalErrorKind::AccessDenied,
        Some("ThrottlingException" | "TooManyRequestsException" | "RequestLimitExceeded") => {
            RetrievalErrorKind::Throttled
        }
        _ => RetrievalErrorKind::Other,
    }
}
