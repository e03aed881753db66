/// SSM Params - tooling for AWS Systems Manager Parameter Store.
///
/// This crate ships two independent tools:
/// 1. A CloudFormation custom resource Lambda that creates, updates or deletes
///    one parameter and reports the outcome to the stack's presigned callback URL
/// 2. A bulk loader CLI that upserts SecureString parameters listed in
///    `<environment>-params.csv` through the AWS CLI
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (`lambda_runtime`) for the custom resource
/// - `aws-sdk-ssm` for Parameter Store calls
/// - reqwest for the CloudFormation callback PUT
/// - csv + clap for the bulk loader
///
/// # Example
///
/// ```no_run
/// use ssm_params::custom_resource::{
///     CloudFormationRequest, CustomResourceHandler, HttpResponseSink, SsmParameterStore,
/// };
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     ssm_params::setup_logging();
///
///     let handler = CustomResourceHandler::new(
///         SsmParameterStore::from_env().await,
///         HttpResponseSink::new(reqwest::Client::new()),
///     );
///
///     let request: CloudFormationRequest = serde_json::from_str(
///         r#"{
///             "RequestType": "Create",
///             "ResponseURL": "https://example.com/callback",
///             "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/MyStack/abcd",
///             "RequestId": "req-1",
///             "LogicalResourceId": "Param1",
///             "ResourceProperties": { "Type": "String", "Value": "hello" }
///         }"#,
///     )?;
///
///     let envelope = handler.handle(&request, "local").await;
///     println!("{:?}: {}", envelope.status, envelope.physical_resource_id);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod bulk_loader;
pub mod core;
pub mod custom_resource;
pub mod errors;

pub use errors::ParamError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at Lambda startup.
///
/// # Example
///
/// ```
/// ssm_params::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}

/// Plain-text logging at INFO for the command line tools.
pub fn setup_cli_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();
}
