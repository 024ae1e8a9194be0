use crate::config::toml_config::{OutputKind, TomlConfig};
use crate::config::{validate_settings, ClockSettings, DEFAULT_INTERVAL_MS};
use crate::core::template::DEFAULT_TEMPLATE;
use crate::core::updater::DEFAULT_ELEMENT_ID;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "datetime-widget")]
#[command(about = "Renders a ticking date/time clock into a document")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to widget definition JSON
    #[arg(long)]
    pub widget: Option<String>,

    /// Id of the container element
    #[arg(long)]
    pub element_id: Option<String>,

    /// Milliseconds between ticks
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// day.js style format template
    #[arg(long)]
    pub template: Option<String>,

    /// Write an HTML page here instead of printing to stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Stop after this many ticks
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Render a single tick and exit
    #[arg(long, conflicts_with = "ticks")]
    pub once: bool,

    /// Render this instant instead of the system clock
    #[arg(long)]
    pub at: Option<String>,

    /// Exit on the first failed tick
    #[arg(long)]
    pub halt_on_error: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn tick_limit(&self) -> Option<u64> {
        if self.once {
            Some(1)
        } else {
            self.ticks
        }
    }

    /// 命令列參數覆蓋 TOML 設定
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(id) = &self.element_id {
            config.clock.element_id = id.clone();
        }
        if let Some(ms) = self.interval_ms {
            config.clock.interval_ms = ms;
        }
        if let Some(template) = &self.template {
            config.clock.template = template.clone();
        }
        if let Some(path) = &self.output {
            config.output.kind = OutputKind::Html;
            config.output.path = Some(path.clone());
        }
        if let Some(widget) = &self.widget {
            config.widget = Some(widget.clone());
        }
        if self.halt_on_error {
            config.clock.halt_on_error = true;
        }
    }
}

impl ClockSettings for CliConfig {
    fn element_id(&self) -> &str {
        self.element_id.as_deref().unwrap_or(DEFAULT_ELEMENT_ID)
    }

    fn interval_ms(&self) -> u64 {
        self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS)
    }

    fn template(&self) -> &str {
        self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE)
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn widget_definition(&self) -> Option<&str> {
        self.widget.as_deref()
    }

    fn halt_on_error(&self) -> bool {
        self.halt_on_error
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
