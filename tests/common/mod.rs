//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tempfile::TempDir;
use viasp_dash::backend::BackendClient;
use viasp_dash::dashboard::{DashProps, HostNotification};
use viasp_dash::ui::messages::{MessagesReducer, MessagesState};
use viasp_dash::ui::mvi::StoreHandle;

/// Find an available port for testing.
///
/// Nothing listens on the returned port once this function returns, so
/// connecting to it fails.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL of a backend that refuses connections.
pub fn unreachable_backend() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Create a temporary config file with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn client() -> BackendClient {
    viasp_dash::logging::init_tracing();
    BackendClient::new().expect("Failed to build backend client")
}

pub fn props(backend_url: &str) -> DashProps {
    DashProps {
        backend_url: backend_url.to_string(),
        ..DashProps::default()
    }
}

/// Wait until the queue holds at least `count` messages.
pub async fn wait_for_messages(
    messages: &StoreHandle<MessagesReducer>,
    count: usize,
    timeout: Duration,
) -> MessagesState {
    let mut rx = messages.subscribe();
    let reached = tokio::time::timeout(timeout, async {
        loop {
            if rx.borrow_and_update().len() >= count {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    })
    .await;
    assert!(
        reached.is_ok(),
        "expected {} messages, have {:?}",
        count,
        messages.state()
    );
    messages.state()
}

/// Host notifier that records everything it receives.
#[derive(Clone, Default)]
pub struct RecordingHost(pub Arc<Mutex<Vec<HostNotification>>>);

impl RecordingHost {
    pub fn notifier(&self) -> impl Fn(HostNotification) + Send + Sync + 'static {
        let received = Arc::clone(&self.0);
        move |notification| received.lock().push(notification)
    }

    pub fn received(&self) -> Vec<HostNotification> {
        self.0.lock().clone()
    }
}
