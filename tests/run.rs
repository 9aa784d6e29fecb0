//! Integration tests for the `run` command.
use std::path::PathBuf;
use tempfile::tempdir;
use vaxmap::cli::{RunOpts, handle_run_command};
use vaxmap::report::ReportKind;
use vaxmap::settings::Settings;

/// Get the path to the example data file.
fn get_data_file() -> PathBuf {
    PathBuf::from("demos/townsville/data.json")
}

/// An integration test for the `run` command.
#[test]
fn test_handle_run_command() {
    unsafe { std::env::set_var("VAXMAP_LOG_LEVEL", "off") };

    {
        // Save logs to non-existent directory to check that directory creation works
        let tempdir = tempdir().unwrap();
        let log_dir = tempdir.path().join("logs");
        let opts = RunOpts {
            intake: Some(18),
            report: Some(ReportKind::Simple),
            log_dir: Some(log_dir.clone()),
        };
        handle_run_command(&get_data_file(), &opts, Some(Settings::default())).unwrap();
        assert!(log_dir.join("vaxmap_info.log").is_file());
        assert!(log_dir.join("vaxmap_error.log").is_file());
    }

    // Second time will fail because the logging is already initialised
    assert_eq!(
        handle_run_command(&get_data_file(), &RunOpts::default(), Some(Settings::default()))
            .unwrap_err()
            .chain()
            .next()
            .unwrap()
            .to_string(),
        "Failed to initialise logging."
    );
}
