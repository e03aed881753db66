//! Stack ARN parsing and parameter naming.

use crate::errors::ParamError;

/// The parts of a CloudFormation stack ARN the handler needs.
///
/// `arn:aws:cloudformation:us-east-1:123456789012:stack/MyStack/abcd`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackArn {
    pub partition: String,
    pub region: String,
    pub account_id: String,
    pub stack_name: String,
}

impl StackArn {
    /// # Errors
    ///
    /// Returns `ParseError` if `stack_id` is not a colon-delimited ARN with a
    /// `stack/<name>/<id>` resource field.
    pub fn parse(stack_id: &str) -> Result<Self, ParamError> {
        let fields: Vec<&str> = stack_id.split(':').collect();
        if fields.len() < 6 || fields[0] != "arn" {
            return Err(ParamError::ParseError(format!(
                "malformed stack ARN '{stack_id}'"
            )));
        }

        let stack_name = fields[5]
            .split('/')
            .nth(1)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                ParamError::ParseError(format!("stack ARN '{stack_id}' has no stack name"))
            })?;

        Ok(Self {
            partition: fields[1].to_string(),
            region: fields[3].to_string(),
            account_id: fields[4].to_string(),
            stack_name: stack_name.to_string(),
        })
    }

    /// Parameter Store ARN for `name` in this stack's partition, region and account.
    #[must_use]
    pub fn parameter_arn(&self, name: &str) -> String {
        // Hierarchical names already carry their leading slash.
        let separator = if name.starts_with('/') { "" } else { "/" };
        format!(
            "arn:{}:ssm:{}:{}:parameter{}{}",
            self.partition, self.region, self.account_id, separator, name
        )
    }
}

#[must_use]
pub fn default_parameter_name(stack_name: &str, logical_resource_id: &str) -> String {
    format!("cfn-{stack_name}-{logical_resource_id}")
}
