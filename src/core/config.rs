use std::env;
use std::path::PathBuf;

pub const DEFAULT_PATH_ROOT: &str = "/lucidity";
pub const DEFAULT_AWS_CLI: &str = "aws";

/// Settings for one bulk loader run.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub environment: String,
    pub csv_path: PathBuf,
    pub path_root: String,
    pub aws_cli: PathBuf,
}

impl LoaderConfig {
    /// Defaults for `environment`: reads `<environment>-params.csv` from the
    /// current directory and writes under `/lucidity/<environment>/`.
    #[must_use]
    pub fn new(environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            csv_path: PathBuf::from(csv_file_name(environment)),
            path_root: DEFAULT_PATH_ROOT.to_string(),
            aws_cli: PathBuf::from(DEFAULT_AWS_CLI),
        }
    }

    /// Like [`LoaderConfig::new`], with `PARAM_PATH_ROOT` and `AWS_CLI_PATH`
    /// overrides taken from the environment.
    #[must_use]
    pub fn from_env(environment: &str) -> Self {
        let mut config = Self::new(environment);
        if let Some(root) = env::var("PARAM_PATH_ROOT").ok().filter(|v| !v.is_empty()) {
            config.path_root = root;
        }
        if let Some(cli) = env::var("AWS_CLI_PATH").ok().filter(|v| !v.is_empty()) {
            config.aws_cli = PathBuf::from(cli);
        }
        config
    }
}

#[must_use]
pub fn csv_file_name(environment: &str) -> String {
    format!("{environment}-params.csv")
}
