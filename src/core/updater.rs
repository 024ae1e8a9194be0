use crate::core::template::FormatTemplate;
use crate::domain::ports::{Clock, Document};
use crate::utils::error::Result;
use chrono::NaiveDateTime;

pub const DEFAULT_ELEMENT_ID: &str = "clock";

/// Renders the current instant and writes it into one container element.
pub struct ClockUpdater<C: Clock, D: Document> {
    clock: C,
    document: D,
    element_id: String,
    template: FormatTemplate,
}

impl<C: Clock, D: Document> ClockUpdater<C, D> {
    pub fn new(clock: C, document: D, element_id: impl Into<String>, template: FormatTemplate) -> Self {
        Self {
            clock,
            document,
            element_id: element_id.into(),
            template,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn render_at(&self, at: &NaiveDateTime) -> String {
        self.template.render(at)
    }

    /// Replaces the container's markup with the rendering of `at`.
    pub async fn update_at(&self, at: NaiveDateTime) -> Result<String> {
        let markup = self.render_at(&at);
        self.document
            .replace_inner_html(&self.element_id, &markup)
            .await?;
        tracing::debug!("🕒 #{} <- {}", self.element_id, at);
        Ok(markup)
    }

    pub async fn update(&self) -> Result<String> {
        let now = self.clock.now();
        self.update_at(now).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryDocument;
    use crate::core::clock::FixedClock;
    use crate::utils::error::WidgetError;
    use chrono::NaiveDate;

    fn thursday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[tokio::test]
    async fn test_update_writes_rendered_clock() {
        let document = MemoryDocument::with_elements(["clock"]);
        let updater = ClockUpdater::new(
            FixedClock(thursday()),
            document,
            DEFAULT_ELEMENT_ID,
            FormatTemplate::default(),
        );

        let markup = updater.update().await.unwrap();
        assert!(markup.starts_with(r#"<div class="time">2:05:09"#));
        assert_eq!(updater.document().inner_html("clock").await.unwrap(), markup);
    }

    #[tokio::test]
    async fn test_second_update_replaces_first() {
        let document = MemoryDocument::with_elements(["clock"]);
        let updater = ClockUpdater::new(
            FixedClock(thursday()),
            document,
            "clock",
            FormatTemplate::parse("h:mm:ss A"),
        );

        updater.update_at(thursday()).await.unwrap();
        let later = thursday() + chrono::Duration::hours(-10);
        updater.update_at(later).await.unwrap();

        assert_eq!(updater.document().inner_html("clock").await.unwrap(), "4:05:09 AM");
    }

    #[tokio::test]
    async fn test_missing_container_fails_without_writing() {
        let document = MemoryDocument::with_elements(["calendar"]);
        document.replace_inner_html("calendar", "untouched").await.unwrap();
        let updater = ClockUpdater::new(
            FixedClock(thursday()),
            document,
            "clock",
            FormatTemplate::default(),
        );

        let err = updater.update().await.unwrap_err();
        assert!(matches!(err, WidgetError::ElementNotFound { ref element_id } if element_id == "clock"));
        assert!(!updater.document().contains("clock").await);
        assert_eq!(updater.document().inner_html("calendar").await.unwrap(), "untouched");
    }
}
