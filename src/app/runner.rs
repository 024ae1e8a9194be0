use crate::adapters::html_file::{HtmlFileDocument, PageShell};
use crate::adapters::stdout::StdoutDocument;
use crate::config::widget::WidgetDefinition;
use crate::config::ClockSettings;
use crate::core::clock::{FixedClock, SystemClock};
use crate::core::template::FormatTemplate;
use crate::core::ticker::ClockTicker;
use crate::core::updater::ClockUpdater;
use crate::domain::model::TickReport;
use crate::domain::ports::{Clock, Document};
use crate::utils::error::{Result, WidgetError};
use crate::utils::validation::Validate;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// `None` runs until Ctrl-C.
    pub ticks: Option<u64>,
    /// Freeze the clock at this instant.
    pub at: Option<NaiveDateTime>,
}

pub fn load_widget_definition<S: ClockSettings + ?Sized>(
    settings: &S,
) -> Result<Option<WidgetDefinition>> {
    let Some(path) = settings.widget_definition() else {
        return Ok(None);
    };

    let definition = WidgetDefinition::from_file(path)?;
    definition.validate()?;

    // 這個程式不載入任何 extension
    if let Some(extension) = definition.missing_extensions(&[]).first() {
        return Err(WidgetError::ConfigError {
            message: format!(
                "Missing extension \"{}\" for widget \"{}\"",
                extension, definition.name
            ),
        });
    }

    tracing::info!(
        "🧩 Widget '{}' ({}x{})",
        definition.name,
        definition.width,
        definition.height
    );
    Ok(Some(definition))
}

pub async fn build_document<S: ClockSettings + ?Sized>(settings: &S) -> Result<Box<dyn Document>> {
    let definition = load_widget_definition(settings)?;

    match settings.output_path() {
        Some(path) => {
            let shell = definition.as_ref().map(PageShell::from).unwrap_or_default();
            let document = HtmlFileDocument::new(path, shell, [settings.element_id()]);
            document.flush().await?;
            tracing::info!("📁 Writing clock page to {}", path);
            Ok(Box::new(document))
        }
        None => Ok(Box::new(StdoutDocument::new([settings.element_id()]))),
    }
}

pub fn build_clock(at: Option<NaiveDateTime>) -> Box<dyn Clock> {
    match at {
        Some(at) => {
            tracing::info!("📌 Clock frozen at {}", at);
            Box::new(FixedClock(at))
        }
        None => Box::new(SystemClock),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("⚠️ Cannot listen for Ctrl-C ({}), running until killed", e);
        std::future::pending::<()>().await;
    }
}

/// Builds the clock described by `settings` and ticks it.
pub async fn run<S: ClockSettings + ?Sized>(settings: &S, options: RunOptions) -> Result<TickReport> {
    let document = build_document(settings).await?;
    let template = FormatTemplate::parse(settings.template());
    tracing::debug!("Template: {}", template);

    let updater = ClockUpdater::new(
        build_clock(options.at),
        document,
        settings.element_id(),
        template,
    );
    let ticker = ClockTicker::new(updater, settings.interval())?
        .halt_on_error(settings.halt_on_error());

    match options.ticks {
        Some(ticks) => ticker.run_ticks(ticks).await,
        None => ticker.run_until(shutdown_signal()).await,
    }
}
