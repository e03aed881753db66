use ssm_params::errors::ParamError;
use std::error::Error;

#[test]
fn test_param_error_implements_error_trait() {
    // Verify ParamError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = ParamError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_param_error_display() {
    let error = ParamError::AwsError("ssm put_parameter: AccessDenied".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with AWS services: ssm put_parameter: AccessDenied"
    );

    let error = ParamError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = ParamError::ValidationError("missing required property 'Value'".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid resource properties: missing required property 'Value'"
    );
}

#[test]
fn test_param_error_from_conversions() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test-params.csv");
    match ParamError::from(io_err) {
        ParamError::IoError(msg) => assert!(msg.contains("test-params.csv")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(
        ParamError::from(json_err),
        ParamError::ParseError(_)
    ));

    // We can't easily build a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> ParamError {
        ParamError::from(err)
    }
}
