use std::fmt;
use std::str::FromStr;

use aws_sdk_ssm::types::ParameterType;

use crate::errors::ParamError;

/// Parameter Store value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    StringList,
    SecureString,
}

impl ParameterKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterKind::String => "String",
            ParameterKind::StringList => "StringList",
            ParameterKind::SecureString => "SecureString",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterKind {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(ParameterKind::String),
            "StringList" => Ok(ParameterKind::StringList),
            "SecureString" => Ok(ParameterKind::SecureString),
            other => Err(ParamError::ValidationError(format!(
                "unsupported parameter Type '{other}' (expected String, StringList or SecureString)"
            ))),
        }
    }
}

impl From<ParameterKind> for ParameterType {
    fn from(kind: ParameterKind) -> Self {
        match kind {
            ParameterKind::String => ParameterType::String,
            ParameterKind::StringList => ParameterType::StringList,
            ParameterKind::SecureString => ParameterType::SecureString,
        }
    }
}

/// A single put against the parameter store.
///
/// `description` and `key_id` are only sent when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRequest {
    pub name: String,
    pub kind: ParameterKind,
    pub value: String,
    pub overwrite: bool,
    pub description: Option<String>,
    pub key_id: Option<String>,
}
