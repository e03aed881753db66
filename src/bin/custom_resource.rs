// Lambda entry point for the SSM parameter custom resource

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use ssm_params::custom_resource::{
    CustomResourceHandler, HttpResponseSink, SsmParameterStore, function_handler,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    ssm_params::setup_logging();

    // Clients live for the whole container and are shared by every invocation.
    let handler = CustomResourceHandler::new(
        SsmParameterStore::from_env().await,
        HttpResponseSink::new(reqwest::Client::new()),
    );
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
