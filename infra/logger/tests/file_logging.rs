use mguide_domain::config::LogSettings;
use mguide_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_with_directory_create_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let settings =
        LogSettings { level: "info".to_owned(), directory: Some(log_dir.clone()), json: true };

    let logger = Logger::from_settings("integration-file-logging", &settings)?;
    assert!(logger.writes_files());

    tracing::info!(page = "guide", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("hello from integration test"));
    assert!(contents.trim_start().starts_with('{'), "json output expected");

    Ok(())
}
