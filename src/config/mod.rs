#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;
pub mod widget;

use crate::utils::error::Result;
use crate::utils::validation::{validate_element_id, validate_path, validate_range};
use std::time::Duration;

pub const DEFAULT_INTERVAL_MS: u64 = 1000;
pub const MAX_INTERVAL_MS: u64 = 86_400_000;

/// What the runner needs to know to build a clock.
pub trait ClockSettings: Send + Sync {
    fn element_id(&self) -> &str;
    fn interval_ms(&self) -> u64;
    fn template(&self) -> &str;
    /// `None` means print to stdout.
    fn output_path(&self) -> Option<&str>;
    fn widget_definition(&self) -> Option<&str>;
    fn halt_on_error(&self) -> bool;

    fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }
}

pub(crate) fn validate_settings<S: ClockSettings + ?Sized>(settings: &S) -> Result<()> {
    validate_element_id("clock.element_id", settings.element_id())?;
    validate_range("clock.interval_ms", settings.interval_ms(), 1, MAX_INTERVAL_MS)?;
    if let Some(path) = settings.output_path() {
        validate_path("output.path", path)?;
    }
    if let Some(path) = settings.widget_definition() {
        validate_path("widget", path)?;
    }
    Ok(())
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
