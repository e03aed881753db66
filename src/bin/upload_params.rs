// Uploads `<environment>-params.csv` to Parameter Store as SecureString parameters.
//
// Usage: upload-params <environment_name>

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use ssm_params::ParamError;
use ssm_params::bulk_loader::{self, AwsCliUploader, LoaderCli};
use ssm_params::core::config::LoaderConfig;
use tracing::{error, info};

fn main() -> ExitCode {
    ssm_params::setup_cli_logging();

    let cli = match LoaderCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let err = ParamError::UsageError("upload-params <environment_name>".to_string());
            error!("{}", err);
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let config = LoaderConfig::from_env(&cli.environment);
    let uploader = AwsCliUploader::new(&config.aws_cli);

    match bulk_loader::run(&config, &uploader) {
        Ok(summary) => {
            info!(
                "Updated {} parameters under {}/{}",
                summary.updated, config.path_root, config.environment
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
