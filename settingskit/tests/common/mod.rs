//! Shared test helpers for settings tests.

#![allow(dead_code)]

use settingskit::{SettingsDefinition, SettingsEvent};
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

settingskit::declare_settings! {
    /// The sample application settings used across tests.
    pub struct AppSettings {
        /// Plain text.
        string_prop / set_string_prop: String => "String Property";
        uri_prop / set_uri_prop: Uri("Please enter a valid URI") => "Uri Property";
        password_prop / set_password_prop: Password => "Password Property";
        retry_count / set_retry_count: Integer(3) => "Retry Count";
    }
}

/// The same rows as `AppSettings`, for driving an engine directly.
pub const APP_SCHEMA: &[SettingsDefinition] = &[
    SettingsDefinition::string("String Property", "string_prop"),
    SettingsDefinition::uri("Uri Property", "uri_prop"),
    SettingsDefinition::password("Password Property", "password_prop"),
    SettingsDefinition::integer("Retry Count", "retry_count"),
];

/// Installs a test-friendly subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Everything currently buffered on `rx`.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<SettingsEvent>) -> Vec<SettingsEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Keys of the `Changed` events in `events`.
pub fn changed_keys(events: &[SettingsEvent]) -> Vec<&str> {
    events
        .iter()
        .filter(|e| e.is_change())
        .map(|e| e.key())
        .collect()
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a debug-level subscriber on this thread and returns what it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
