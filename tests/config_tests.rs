use std::env;
use std::path::Path;

use ssm_params::core::config::LoaderConfig;

// Only test in this binary, so mutating the process environment cannot race
// with other tests.
#[test]
fn test_from_env_overrides_and_empty_values() {
    let saved_root = env::var("PARAM_PATH_ROOT").ok();
    let saved_cli = env::var("AWS_CLI_PATH").ok();

    unsafe {
        env::set_var("PARAM_PATH_ROOT", "/platform");
        env::set_var("AWS_CLI_PATH", "/opt/aws/bin/aws");
    }
    let config = LoaderConfig::from_env("prod");
    assert_eq!(config.path_root, "/platform");
    assert_eq!(config.aws_cli, Path::new("/opt/aws/bin/aws"));
    assert_eq!(config.csv_path, Path::new("prod-params.csv"));

    // Empty values fall back to the defaults
    unsafe {
        env::set_var("PARAM_PATH_ROOT", "");
        env::set_var("AWS_CLI_PATH", "");
    }
    let config = LoaderConfig::from_env("prod");
    assert_eq!(config.path_root, "/lucidity");
    assert_eq!(config.aws_cli, Path::new("aws"));

    unsafe {
        env::remove_var("PARAM_PATH_ROOT");
        env::remove_var("AWS_CLI_PATH");
    }
    let config = LoaderConfig::from_env("prod");
    assert_eq!(config.path_root, "/lucidity");
    assert_eq!(config.aws_cli, Path::new("aws"));

    unsafe {
        match saved_root {
            Some(v) => env::set_var("PARAM_PATH_ROOT", v),
            None => env::remove_var("PARAM_PATH_ROOT"),
        }
        match saved_cli {
            Some(v) => env::set_var("AWS_CLI_PATH", v),
            None => env::remove_var("AWS_CLI_PATH"),
        }
    }
}
