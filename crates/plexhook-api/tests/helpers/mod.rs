//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p plexhook-api --test webhook_test`.

pub mod fixtures;

use axum_test::TestServer;
use plexhook_api::setup::routes;
use plexhook_api::state::AppState;
use plexhook_core::Config;
use plexhook_storage::LocalStorage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus the scratch upload directory it writes into.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_path(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Names of all files written to the upload directory
    pub fn uploaded_files(&self) -> Vec<String> {
        list_files(&self.upload_dir)
    }
}

fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Setup test app with default configuration and an isolated upload directory.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup test app, letting the caller adjust the configuration first.
pub async fn setup_test_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let upload_dir = temp_dir.path().join("uploads");

    let mut config = Config {
        upload_dir: upload_dir.clone(),
        ..Config::default()
    };
    configure(&mut config);

    let storage = LocalStorage::new(config.upload_dir().clone(), config.strict_filenames())
        .await
        .expect("Failed to create local storage");
    let state = Arc::new(AppState::new(config.clone(), Arc::new(storage)));
    let router = routes::setup_routes(&config, state);

    TestApp {
        server: TestServer::new(router).expect("Failed to create test server"),
        upload_dir,
        _temp_dir: temp_dir,
    }
}
