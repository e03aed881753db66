use async_trait::async_trait;
use aws_sdk_ssm::Client as SsmClient;
use tracing::info;

use crate::core::models::ParameterRequest;
use crate::errors::ParamError;

/// The two Parameter Store operations the custom resource needs.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    async fn put_parameter(&self, request: &ParameterRequest) -> Result<(), ParamError>;

    async fn delete_parameter(&self, name: &str) -> Result<(), ParamError>;
}

/// `ParameterStore` backed by AWS Systems Manager.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: SsmClient,
}

impl SsmParameterStore {
    #[must_use]
    pub fn new(client: SsmClient) -> Self {
        Self { client }
    }

    /// Builds a client from the ambient AWS environment (region, credentials).
    pub async fn from_env() -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(SsmClient::new(&shared))
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn put_parameter(&self, request: &ParameterRequest) -> Result<(), ParamError> {
        let resp = self
            .client
            .put_parameter()
            .name(&request.name)
            .value(&request.value)
            .r#type(request.kind.into())
            .overwrite(request.overwrite)
            .set_description(request.description.clone())
            .set_key_id(request.key_id.clone())
            .send()
            .await
            .map_err(|e| {
                ParamError::AwsError(format!(
                    "ssm put_parameter: {}",
                    aws_sdk_ssm::error::DisplayErrorContext(&e)
                ))
            })?;

        info!(
            name = %request.name,
            version = resp.version(),
            overwrite = request.overwrite,
            "Stored parameter"
        );
        Ok(())
    }

    async fn delete_parameter(&self, name: &str) -> Result<(), ParamError> {
        self.client
            .delete_parameter()
            .name(name)
            .send()
            .await
            .map_err(|e| {
                ParamError::AwsError(format!(
                    "ssm delete_parameter: {}",
                    aws_sdk_ssm::error::DisplayErrorContext(&e)
                ))
            })?;

        info!(name = %name, "Deleted parameter");
        Ok(())
    }
}
