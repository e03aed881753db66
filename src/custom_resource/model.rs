use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::models::{ParameterKind, ParameterRequest};
use crate::errors::ParamError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

/// Custom-resource request sent by CloudFormation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFormationRequest {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    #[serde(default)]
    pub resource_type: Option<String>,
    pub logical_resource_id: String,
    #[serde(default)]
    pub physical_resource_id: Option<String>,
    #[serde(default)]
    pub resource_properties: ResourceProperties,
    #[serde(default)]
    pub old_resource_properties: Option<Value>,
}

/// `Properties` of the `Custom::` resource in the template.
///
/// Fields are kept as raw JSON: a template can pass a list or an object where
/// a string is expected, and that must come back to the stack as a FAILED
/// response instead of failing deserialization of the whole event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, rename = "Type")]
    pub parameter_type: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub key_id: Option<Value>,
}

fn string_property(value: Option<&Value>, property: &str) -> Result<Option<String>, ParamError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ParamError::ValidationError(format!(
            "property '{property}' must be a string, got {other}"
        ))),
    }
}

impl ResourceProperties {
    /// The `Name` override, if any.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `Name` is not a string.
    pub fn name(&self) -> Result<Option<String>, ParamError> {
        string_property(self.name.as_ref(), "Name")
    }

    /// Builds the put request for Create/Update.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `Type` or `Value` is missing, any property
    /// is not a string, or `Type` is not a Parameter Store type.
    pub fn to_put_request(
        &self,
        name: &str,
        overwrite: bool,
    ) -> Result<ParameterRequest, ParamError> {
        let kind: ParameterKind = string_property(self.parameter_type.as_ref(), "Type")?
            .ok_or_else(|| ParamError::ValidationError("missing required property 'Type'".into()))?
            .parse()?;
        let value = string_property(self.value.as_ref(), "Value")?.ok_or_else(|| {
            ParamError::ValidationError("missing required property 'Value'".into())
        })?;

        Ok(ParameterRequest {
            name: name.to_string(),
            kind,
            value,
            overwrite,
            description: string_property(self.description.as_ref(), "Description")?,
            key_id: string_property(self.key_id.as_ref(), "KeyId")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Body PUT to the presigned `ResponseURL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseEnvelope {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub no_echo: bool,
    pub data: BTreeMap<String, String>,
}

impl ResponseEnvelope {
    #[must_use]
    pub fn for_request(
        request: &CloudFormationRequest,
        status: ResponseStatus,
        reason: String,
        physical_resource_id: String,
        data: BTreeMap<String, String>,
    ) -> Self {
        Self {
            status,
            reason,
            physical_resource_id,
            stack_id: request.stack_id.clone(),
            request_id: request.request_id.clone(),
            logical_resource_id: request.logical_resource_id.clone(),
            no_echo: false,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_deserializes_cloudformation_payload() {
        let payload = json!({
            "RequestType": "Create",
            "ServiceToken": "arn:aws:lambda:us-east-1:123456789012:function:param",
            "ResponseURL": "https://cloudformation-custom-resource-response.s3.amazonaws.com/x",
            "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/MyStack/abcd",
            "RequestId": "req-1",
            "ResourceType": "Custom::SsmParameter",
            "LogicalResourceId": "Param1",
            "ResourceProperties": {
                "ServiceToken": "arn:aws:lambda:us-east-1:123456789012:function:param",
                "Type": "SecureString",
                "Value": "hunter2",
                "KeyId": "alias/app"
            }
        });

        let request: CloudFormationRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.request_type, RequestType::Create);
        assert!(request.response_url.starts_with("https://"));
        assert_eq!(request.physical_resource_id, None);
        assert_eq!(request.resource_properties.name().unwrap(), None);
        let put = request.resource_properties.to_put_request("p", false).unwrap();
        assert_eq!(put.key_id.as_deref(), Some("alias/app"));
    }

    #[test]
    fn test_to_put_request_requires_type_and_value() {
        let props = ResourceProperties {
            value: Some(json!("v")),
            ..ResourceProperties::default()
        };
        assert!(matches!(
            props.to_put_request("n", false),
            Err(ParamError::ValidationError(_))
        ));

        let props = ResourceProperties {
            parameter_type: Some(json!("String")),
            ..ResourceProperties::default()
        };
        assert!(matches!(
            props.to_put_request("n", false),
            Err(ParamError::ValidationError(_))
        ));
    }

    #[test]
    fn test_to_put_request_rejects_unknown_type() {
        let props = ResourceProperties {
            parameter_type: Some(json!("Integer")),
            value: Some(json!("1")),
            ..ResourceProperties::default()
        };
        let err = props.to_put_request("n", true).unwrap_err();
        assert!(err.to_string().contains("Integer"));
    }

    #[test]
    fn test_non_string_properties_are_validation_errors() {
        let payload = json!({
            "RequestType": "Update",
            "ResponseURL": "https://example.com/cb",
            "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/MyStack/abcd",
            "RequestId": "req-1",
            "LogicalResourceId": "Param1",
            "ResourceProperties": { "Type": "StringList", "Value": ["a", "b"], "Name": 7 },
            "OldResourceProperties": { "Type": "StringList", "Value": ["a"] }
        });

        let request: CloudFormationRequest = serde_json::from_value(payload).unwrap();
        let props = &request.resource_properties;

        let err = props.to_put_request("p", true).unwrap_err();
        assert!(matches!(err, ParamError::ValidationError(_)));
        assert!(err.to_string().contains("'Value'"));
        assert!(matches!(props.name(), Err(ParamError::ValidationError(_))));
    }

    #[test]
    fn test_envelope_serializes_with_cloudformation_field_names() {
        let mut data = BTreeMap::new();
        data.insert("Name".to_string(), "p".to_string());
        let envelope = ResponseEnvelope {
            status: ResponseStatus::Failed,
            reason: "r".into(),
            physical_resource_id: "id".into(),
            stack_id: "s".into(),
            request_id: "q".into(),
            logical_resource_id: "l".into(),
            no_echo: false,
            data,
        };

        let v = serde_json::to_value(&envelope).unwrap();
        assert_eq!(v["Status"], "FAILED");
        assert_eq!(v["Reason"], "r");
        assert_eq!(v["PhysicalResourceId"], "id");
        assert_eq!(v["StackId"], "s");
        assert_eq!(v["RequestId"], "q");
        assert_eq!(v["LogicalResourceId"], "l");
        assert_eq!(v["NoEcho"], false);
        assert_eq!(v["Data"]["Name"], "p");
    }
}
