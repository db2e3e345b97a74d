// expertise-admin/tests/logging.rs

use expertise_admin::core::logging::init_logging;

#[test]
fn test_file_logging_creates_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("logs");

    let guard = init_logging(Some(&dir)).unwrap();
    assert!(guard.is_some());
    assert!(dir.is_dir());

    tracing::info!("written to file");
    drop(guard);
}
