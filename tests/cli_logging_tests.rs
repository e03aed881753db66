use ssm_params::setup_cli_logging;

// Separate test binary from `logging_tests.rs`: each installs the global subscriber.
#[test]
fn test_cli_logging_setup() {
    let result = std::panic::catch_unwind(|| {
        setup_cli_logging();
        tracing::info!("Updating parameter: /lucidity/test/db-pass");
    });

    assert!(result.is_ok(), "setup_cli_logging function should not panic");
}
