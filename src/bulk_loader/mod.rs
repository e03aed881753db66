//! Bulk upload of SecureString parameters from a CSV file

pub mod cli;
pub mod rows;
pub mod uploader;

use std::fs::File;

use tracing::{error, info};

use crate::core::config::LoaderConfig;
use crate::errors::ParamError;

pub use cli::LoaderCli;
pub use rows::{CsvParameterRow, parameter_path, read_rows};
pub use uploader::{AwsCliUploader, ParameterUploader};

/// Result of a run where every row was uploaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub updated: usize,
}

/// Uploads every row of `config.csv_path`, one at a time, in file order.
///
/// Stops at the first row that fails to parse or upload; later rows are not
/// attempted.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a row is malformed, or an
/// upload fails.
pub fn run<U>(config: &LoaderConfig, uploader: &U) -> Result<LoadSummary, ParamError>
where
    U: ParameterUploader + ?Sized,
{
    let file = File::open(&config.csv_path).map_err(|e| {
        ParamError::IoError(format!("{}: {e}", config.csv_path.display()))
    })?;

    let mut summary = LoadSummary::default();
    for row in read_rows(file) {
        let row = row?;
        let name = parameter_path(&config.path_root, &config.environment, &row.parameter_name);

        info!("Updating parameter: {}", name);
        if let Err(e) = uploader.put_secure_string(&name, &row.secure_value) {
            error!("Error updating parameter {}: {}", name, e);
            return Err(e);
        }
        summary.updated += 1;
    }

    Ok(summary)
}
