use std::collections::BTreeMap;

use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};

use super::arn::{StackArn, default_parameter_name};
use super::callback::ResponseSink;
use super::model::{CloudFormationRequest, RequestType, ResponseEnvelope, ResponseStatus};
use super::store::ParameterStore;
use crate::errors::ParamError;

/// Name and ARN of the parameter a request manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterIdentity {
    pub name: String,
    pub arn: String,
}

impl ParameterIdentity {
    /// `Data` returned to the stack, readable with `Fn::GetAtt`.
    #[must_use]
    pub fn data(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Arn".to_string(), self.arn.clone()),
            ("Name".to_string(), self.name.clone()),
        ])
    }
}

/// Resolves the parameter name (the `Name` property or `cfn-<stack>-<logical id>`)
/// and its ARN, which doubles as the physical resource id.
///
/// # Errors
///
/// Returns `ParseError` if the request's `StackId` is not a stack ARN, or
/// `ValidationError` if `Name` is not a string.
pub fn resolve_identity(request: &CloudFormationRequest) -> Result<ParameterIdentity, ParamError> {
    let stack = StackArn::parse(&request.stack_id)?;
    let name = request.resource_properties.name()?.unwrap_or_else(|| {
        default_parameter_name(&stack.stack_name, &request.logical_resource_id)
    });
    let arn = stack.parameter_arn(&name);
    Ok(ParameterIdentity { name, arn })
}

fn str_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str)
}

#[must_use]
pub fn log_stream_reason(log_stream: &str) -> String {
    format!("See the details in CloudWatch Log Stream: {log_stream}")
}

/// Applies one custom-resource request to the parameter store and reports the
/// outcome to CloudFormation.
pub struct CustomResourceHandler<S, R> {
    store: S,
    sink: R,
}

impl<S, R> CustomResourceHandler<S, R>
where
    S: ParameterStore,
    R: ResponseSink,
{
    #[must_use]
    pub fn new(store: S, sink: R) -> Self {
        Self { store, sink }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Runs the request and sends exactly one response to its `ResponseURL`.
    ///
    /// Never fails: store errors become a FAILED envelope and callback errors
    /// are only logged. Returns the envelope that was sent.
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(
            request_type = ?request.request_type,
            logical_resource_id = %request.logical_resource_id,
            request_id = %request.request_id
        )
    )]
    pub async fn handle(
        &self,
        request: &CloudFormationRequest,
        log_stream: &str,
    ) -> ResponseEnvelope {
        info!(stack_id = %request.stack_id, "Handling custom resource request");

        let envelope = self.build_response(request, log_stream).await;

        match self.sink.send(&request.response_url, &envelope).await {
            Ok(()) => info!(status = ?envelope.status, "Response sent to CloudFormation"),
            Err(e) => error!("send(..) failed executing callback PUT: {}", e),
        }

        envelope
    }

    /// Answers an event that could not be parsed as a request, provided it
    /// still carries a `ResponseURL` and the ids CloudFormation correlates on.
    ///
    /// Returns `None` (and sends nothing) when those are missing.
    pub async fn reject(
        &self,
        payload: &Value,
        reason: &str,
        log_stream: &str,
    ) -> Option<ResponseEnvelope> {
        let response_url = str_field(payload, "ResponseURL")?;
        let logical_resource_id = str_field(payload, "LogicalResourceId")?;
        let envelope = ResponseEnvelope {
            status: ResponseStatus::Failed,
            reason: format!("{reason}. {}", log_stream_reason(log_stream)),
            physical_resource_id: str_field(payload, "PhysicalResourceId")
                .unwrap_or(logical_resource_id)
                .to_string(),
            stack_id: str_field(payload, "StackId")?.to_string(),
            request_id: str_field(payload, "RequestId")?.to_string(),
            logical_resource_id: logical_resource_id.to_string(),
            no_echo: false,
            data: BTreeMap::new(),
        };

        if let Err(e) = self.sink.send(response_url, &envelope).await {
            error!("send(..) failed executing callback PUT: {}", e);
        }
        Some(envelope)
    }

    async fn build_response(
        &self,
        request: &CloudFormationRequest,
        log_stream: &str,
    ) -> ResponseEnvelope {
        let details = log_stream_reason(log_stream);

        let identity = match resolve_identity(request) {
            Ok(identity) => identity,
            Err(e) => {
                error!("Failed to resolve parameter identity: {}", e);
                let physical_resource_id = request
                    .physical_resource_id
                    .clone()
                    .unwrap_or_else(|| request.logical_resource_id.clone());
                return ResponseEnvelope::for_request(
                    request,
                    ResponseStatus::Failed,
                    format!("{e}. {details}"),
                    physical_resource_id,
                    BTreeMap::new(),
                );
            }
        };

        let (status, reason) = match self.apply(request, &identity.name).await {
            Ok(()) => (ResponseStatus::Success, details),
            Err(e) => {
                error!(name = %identity.name, "Parameter operation failed: {}", e);
                (ResponseStatus::Failed, format!("{e}. {details}"))
            }
        };

        ResponseEnvelope::for_request(
            request,
            status,
            reason,
            identity.arn.clone(),
            identity.data(),
        )
    }

    async fn apply(&self, request: &CloudFormationRequest, name: &str) -> Result<(), ParamError> {
        match request.request_type {
            // Create must not clobber a parameter that already exists.
            RequestType::Create => {
                let put = request.resource_properties.to_put_request(name, false)?;
                self.store.put_parameter(&put).await
            }
            RequestType::Update => {
                let put = request.resource_properties.to_put_request(name, true)?;
                self.store.put_parameter(&put).await
            }
            RequestType::Delete => self.store.delete_parameter(name).await,
        }
    }
}

/// Lambda entrypoint body. A payload that is not a custom-resource request is
/// still answered with FAILED when it carries a `ResponseURL`; only a payload
/// with nobody to report to fails the invocation.
///
/// # Errors
///
/// Returns an error if the payload cannot be parsed and has no `ResponseURL`
/// and resource ids.
pub async fn function_handler<S, R>(
    handler: &CustomResourceHandler<S, R>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error>
where
    S: ParameterStore,
    R: ResponseSink,
{
    debug!("Custom resource event: {:?}", event.payload);
    let log_stream = &event.context.env_config.log_stream;

    let request = match CloudFormationRequest::deserialize(&event.payload) {
        Ok(request) => request,
        Err(e) => {
            let message = format!("Failed to parse custom resource request: {e}");
            error!("{}", message);
            return match handler.reject(&event.payload, &message, log_stream).await {
                Some(envelope) => Ok(envelope),
                None => Err(Error::from(message)),
            };
        }
    };

    Ok(handler.handle(&request, log_stream).await)
}
