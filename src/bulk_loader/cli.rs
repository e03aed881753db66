use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

/// Upload SecureString parameters from `<environment>-params.csv` to Parameter Store.
#[derive(Debug, Parser)]
#[command(name = "upload-params", version, long_about = None)]
pub struct LoaderCli {
    /// Environment name, e.g. `test`; reads `<environment>-params.csv` from the
    /// current directory
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub environment: String,
}
