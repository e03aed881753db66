use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::errors::ParamError;

/// Writes one SecureString parameter, overwriting any existing value.
pub trait ParameterUploader {
    fn put_secure_string(&self, name: &str, value: &str) -> Result<(), ParamError>;
}

/// Uploads through `aws ssm put-parameter`, inheriting the caller's AWS
/// credentials and profile from the environment.
#[derive(Debug, Clone)]
pub struct AwsCliUploader {
    program: PathBuf,
}

impl AwsCliUploader {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The put-parameter invocation as an argument vector; nothing goes
    /// through a shell.
    #[must_use]
    pub fn command(&self, name: &str, value: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["ssm", "put-parameter", "--name", name])
            // Joined so values starting with '-' are not read as options.
            .arg(format!("--value={value}"))
            .args(["--type", "SecureString", "--overwrite", "--no-cli-pager"]);
        cmd
    }
}

impl ParameterUploader for AwsCliUploader {
    fn put_secure_string(&self, name: &str, value: &str) -> Result<(), ParamError> {
        let output = self
            .command(name, value)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                ParamError::CommandError(format!(
                    "failed to run {}: {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ParamError::CommandError(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}
