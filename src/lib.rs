pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{html_file::HtmlFileDocument, memory::MemoryDocument, stdout::StdoutDocument};
pub use crate::config::{toml_config::TomlConfig, ClockSettings};
pub use crate::core::{
    clock::{FixedClock, SystemClock},
    template::FormatTemplate,
    ticker::ClockTicker,
    updater::ClockUpdater,
};
pub use crate::domain::{model::TickReport, ports::{Clock, Document}};
pub use crate::utils::error::{Result, WidgetError};
