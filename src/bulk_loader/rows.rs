use std::io::Read;

use serde::Deserialize;

use crate::errors::ParamError;

/// One line of `<environment>-params.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsvParameterRow {
    #[serde(rename = "ParameterName")]
    pub parameter_name: String,
    #[serde(rename = "SecureValue")]
    pub secure_value: String,
}

/// Lazily parses rows from a CSV with a `ParameterName,SecureValue` header.
///
/// A malformed row surfaces as an error when the iterator reaches it, so rows
/// before it are still processed in order.
pub fn read_rows<R: Read>(reader: R) -> impl Iterator<Item = Result<CsvParameterRow, ParamError>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader)
        .into_deserialize::<CsvParameterRow>()
        .map(|row| row.map_err(ParamError::from))
}

/// `<root>/<environment>/<name>`, e.g. `/lucidity/test/db-pass`.
#[must_use]
pub fn parameter_path(root: &str, environment: &str, name: &str) -> String {
    format!("{}/{environment}/{name}", root.trim_end_matches('/'))
}
