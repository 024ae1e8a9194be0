use crate::core::updater::ClockUpdater;
use crate::domain::model::TickReport;
use crate::domain::ports::{Clock, Document};
use crate::utils::error::{Result, WidgetError};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Drives a [`ClockUpdater`] on a fixed cadence.
///
/// The first tick fires immediately. Ticks never overlap: the next one is only
/// awaited after the previous update has returned, and a late tick pushes the
/// schedule back instead of firing a burst.
pub struct ClockTicker<C: Clock, D: Document> {
    updater: ClockUpdater<C, D>,
    period: Duration,
    halt_on_error: bool,
}

impl<C: Clock, D: Document> ClockTicker<C, D> {
    pub fn new(updater: ClockUpdater<C, D>, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(WidgetError::InvalidConfigValueError {
                field: "clock.interval_ms".to_string(),
                value: "0".to_string(),
                reason: "Tick interval must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            updater,
            period,
            halt_on_error: false,
        })
    }

    /// Stop at the first failed tick instead of logging it and carrying on.
    pub fn halt_on_error(mut self, halt: bool) -> Self {
        self.halt_on_error = halt;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn updater(&self) -> &ClockUpdater<C, D> {
        &self.updater
    }

    pub async fn run_until<F>(&self, shutdown: F) -> Result<TickReport>
    where
        F: Future<Output = ()>,
    {
        self.run(None, shutdown).await
    }

    pub async fn run_ticks(&self, ticks: u64) -> Result<TickReport> {
        self.run(Some(ticks), std::future::pending()).await
    }

    async fn run<F>(&self, limit: Option<u64>, shutdown: F) -> Result<TickReport>
    where
        F: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut report = TickReport::default();
        tracing::info!(
            "⏱️ Ticking #{} every {:?}",
            self.updater.element_id(),
            self.period
        );

        loop {
            if limit.is_some_and(|max| report.ticks >= max) {
                break;
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("🛑 Shutdown requested");
                    break;
                }
                _ = interval.tick() => {}
            }

            report.ticks += 1;
            if let Err(e) = self.updater.update().await {
                report.failures += 1;
                if self.halt_on_error {
                    tracing::error!("❌ Tick {} failed: {}", report.ticks, e);
                    return Err(e);
                }
                tracing::warn!("⚠️ Tick {} failed: {}", report.ticks, e);
            }
        }

        tracing::info!(
            "✅ Stopped after {} ticks ({} failed)",
            report.ticks,
            report.failures
        );
        Ok(report)
    }
}
